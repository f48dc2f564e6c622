//! # Bookshelf - a GraphQL API for books and authors
//!
//! Bookshelf serves a small GraphQL schema over two related record types,
//! books and authors. Records live either in process memory or in a
//! spreadsheet reached through an HTTP proxy.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default config (memory backend with sample data)
//! bookshelf init
//!
//! # Serve the API and the GraphiQL explorer on port 5000
//! bookshelf serve
//!
//! # Run a one-off query
//! bookshelf query '{ book(id: 1) { name author { name } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP router
//! - [`model`]: Data models (`Book`, `Author`)
//! - [`storage`]: In-memory and remote record storage

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `LibraryError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum router serving it.
pub mod graphql;

pub mod logging;

/// Data models for books and authors.
pub mod model;

/// Record storage behind the `Repository` contract.
pub mod storage;
