//! Command-line interface for the bookshelf.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
