use crate::error::Result;
use crate::model::Record;
use std::future::Future;

use super::memory::MemoryCollection;
use super::remote::RemoteCollection;

/// Read and write access to one kind of record.
///
/// Lookups that find nothing return `Ok(None)`; updates and deletes of a
/// missing id fail with [`LibraryError::NotFound`](crate::error::LibraryError::NotFound).
pub trait Repository<E: Record>: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<E>>> + Send;

    fn fetch_by_id(&self, id: &str) -> impl Future<Output = Result<Option<E>>> + Send;

    /// Store a new record under a freshly issued id and return it.
    fn add(&self, draft: E::Draft) -> impl Future<Output = Result<E>> + Send;

    fn update(&self, id: &str, patch: E::Patch) -> impl Future<Output = Result<E>> + Send;

    fn delete(&self, id: &str) -> impl Future<Output = Result<()>> + Send;
}

/// The backend chosen for a record type at startup.
pub enum Backend<E> {
    Memory(MemoryCollection<E>),
    Remote(RemoteCollection<E>),
}

impl<E: Record> Repository<E> for Backend<E> {
    async fn fetch_all(&self) -> Result<Vec<E>> {
        match self {
            Backend::Memory(c) => c.fetch_all().await,
            Backend::Remote(c) => c.fetch_all().await,
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<E>> {
        match self {
            Backend::Memory(c) => c.fetch_by_id(id).await,
            Backend::Remote(c) => c.fetch_by_id(id).await,
        }
    }

    async fn add(&self, draft: E::Draft) -> Result<E> {
        match self {
            Backend::Memory(c) => c.add(draft).await,
            Backend::Remote(c) => c.add(draft).await,
        }
    }

    async fn update(&self, id: &str, patch: E::Patch) -> Result<E> {
        match self {
            Backend::Memory(c) => c.update(id, patch).await,
            Backend::Remote(c) => c.update(id, patch).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        match self {
            Backend::Memory(c) => c.delete(id).await,
            Backend::Remote(c) => c.delete(id).await,
        }
    }
}
