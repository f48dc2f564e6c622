//! Data models for the bookshelf.
//!
//! - [`Book`]: a book, referencing its author by `author_id`
//! - [`Author`]: a book author
//! - [`Record`]: what a storage backend needs to know about a record type
//! - [`seed`]: sample data for the in-memory backend

mod author;
mod book;
mod record;
pub mod seed;
mod wire;

pub use author::{Author, AuthorDraft, AuthorPatch};
pub use book::{Book, BookDraft, BookPatch};
pub use record::Record;
