//! GraphQL schema, resolvers and HTTP entrypoint for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at http://localhost:5000/graphql)
//! bookshelf serve --port 5000
//!
//! # Execute a query from CLI
//! bookshelf query '{ book(id: 1) { name author { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addAuthor(name: "Tolkien") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `author`, `authors`
//! - **Mutations**: `addBook`, `addAuthor`, `updateBook`, `updateAuthor`,
//!   `deleteBook`, `deleteAuthor`
//! - **Relations**: `Book.author`, `Author.books`

mod schema;
mod server;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server, serve};
pub use types::*;
