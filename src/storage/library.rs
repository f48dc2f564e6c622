use super::memory::MemoryCollection;
use super::remote::{RemoteCollection, http_client};
use super::repository::{Backend, Repository};
use crate::config::{BookshelfConfig, RemoteSettings, StoreKind};
use crate::error::{LibraryError, Result};
use crate::model::{Author, Book, seed};

/// The books and authors served by the API.
pub struct Library {
    pub books: Backend<Book>,
    pub authors: Backend<Author>,
}

impl Library {
    pub fn in_memory(books: Vec<Book>, authors: Vec<Author>) -> Self {
        Self {
            books: Backend::Memory(MemoryCollection::with_records(books)),
            authors: Backend::Memory(MemoryCollection::with_records(authors)),
        }
    }

    pub fn empty() -> Self {
        Self::in_memory(Vec::new(), Vec::new())
    }

    pub fn seeded() -> Self {
        Self::in_memory(seed::books(), seed::authors())
    }

    pub fn remote(settings: &RemoteSettings) -> Result<Self> {
        let client = http_client(settings)?;
        Ok(Self {
            books: Backend::Remote(RemoteCollection::new(client.clone(), &settings.books_url)?),
            authors: Backend::Remote(RemoteCollection::new(client, &settings.authors_url)?),
        })
    }

    pub fn from_config(config: &BookshelfConfig) -> Result<Self> {
        match config.store.backend {
            StoreKind::Memory if config.store.seed => Ok(Self::seeded()),
            StoreKind::Memory => Ok(Self::empty()),
            StoreKind::Remote => {
                let remote = config.store.remote.as_ref().ok_or_else(|| {
                    LibraryError::Config("remote backend selected but `store.remote` is missing".to_string())
                })?;
                Self::remote(remote)
            }
        }
    }

    /// Books whose `author_id` points at `author_id`, in store order.
    pub async fn books_by(&self, author_id: &str) -> Result<Vec<Book>> {
        let books = self.books.fetch_all().await?;
        Ok(books.into_iter().filter(|b| b.is_by(author_id)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RemoteSettings;

    #[tokio::test]
    async fn test_books_by_author() {
        let library = Library::seeded();
        let books = library.books_by("2").await.unwrap();
        assert_eq!(books.len(), 3);
        assert!(books.iter().all(|b| b.author_id == "2"));
        assert!(library.books_by("42").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unseeded_memory_store_is_empty() {
        let mut config = BookshelfConfig::default();
        config.store.seed = false;
        let library = Library::from_config(&config).unwrap();
        assert!(library.books.fetch_all().await.unwrap().is_empty());
        assert!(library.authors.fetch_all().await.unwrap().is_empty());
    }

    #[test]
    fn test_remote_from_config() {
        let config = BookshelfConfig::remote(RemoteSettings::new(
            "http://localhost:9/books",
            "http://localhost:9/authors",
        ));
        let library = Library::from_config(&config).unwrap();
        assert!(matches!(library.books, Backend::Remote(_)));
        assert!(matches!(library.authors, Backend::Remote(_)));
    }
}
