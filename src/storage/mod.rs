//! Storage layer for books and authors.
//!
//! Every record type is reached through the [`Repository`] contract, backed
//! either by process memory or by a spreadsheet proxy over HTTP:
//!
//! - [`MemoryCollection`]: records in a mutex-guarded `Vec`, counter ids
//! - [`RemoteCollection`]: full-sheet `GET` per read, `POST` per write,
//!   random string ids
//! - [`Library`]: one backend per record type, built once from configuration

mod library;
mod memory;
mod remote;
mod repository;

pub use library::Library;
pub use memory::MemoryCollection;
pub use remote::{RemoteCollection, http_client};
pub use repository::{Backend, Repository};
