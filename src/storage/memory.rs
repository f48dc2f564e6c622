use super::repository::Repository;
use crate::error::{LibraryError, Result};
use crate::model::Record;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct Inner<E> {
    records: Vec<E>,
    next_id: u64,
}

/// Records held in process memory, in insertion order.
///
/// Ids are decimal strings from a counter owned by the collection. The
/// counter only moves forward, so an id is never handed out twice even
/// after deletes.
pub struct MemoryCollection<E> {
    inner: Mutex<Inner<E>>,
}

impl<E: Record> MemoryCollection<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records. The counter resumes after the highest
    /// numeric id among them.
    pub fn with_records(records: Vec<E>) -> Self {
        let highest = records
            .iter()
            .filter_map(|r| r.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            inner: Mutex::new(Inner {
                records,
                next_id: highest + 1,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner<E>> {
        // Records stay consistent even if a holder panicked mid-scan.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<E: Record> Default for MemoryCollection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record> Repository<E> for MemoryCollection<E> {
    async fn fetch_all(&self) -> Result<Vec<E>> {
        Ok(self.lock().records.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<E>> {
        Ok(self.lock().records.iter().find(|r| r.id() == id).cloned())
    }

    async fn add(&self, draft: E::Draft) -> Result<E> {
        let mut inner = self.lock();
        let id = inner.next_id.to_string();
        inner.next_id += 1;

        tracing::info!(kind = E::KIND, id = %id, "Creating record");
        let record = E::from_draft(id, draft);
        inner.records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, patch: E::Patch) -> Result<E> {
        tracing::info!(kind = E::KIND, id = %id, "Updating record");

        let mut inner = self.lock();
        let record = inner
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| LibraryError::not_found(E::KIND, id))?;
        record.apply(patch);
        Ok(record.clone())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::info!(kind = E::KIND, id = %id, "Deleting record");

        let mut inner = self.lock();
        let index = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| LibraryError::not_found(E::KIND, id))?;
        inner.records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, AuthorDraft, AuthorPatch, Book, BookDraft, BookPatch};

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let books: MemoryCollection<Book> = MemoryCollection::new();
        let first = books.add(BookDraft::new("Dune", "1")).await.unwrap();
        let second = books.add(BookDraft::new("Dune Messiah", "1")).await.unwrap();
        books.delete(&second.id).await.unwrap();

        let third = books.add(BookDraft::new("Children of Dune", "1")).await.unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
        assert_eq!(third.id, "3");
        assert_eq!(books.len(), 2);
    }

    #[tokio::test]
    async fn test_counter_resumes_after_seeded_records() {
        let authors = MemoryCollection::with_records(vec![
            Author::new("4".to_string(), "Herbert".to_string()),
            Author::new("legacy".to_string(), "Le Guin".to_string()),
        ]);
        let added = authors.add(AuthorDraft::new("Tolkien")).await.unwrap();
        assert_eq!(added.id, "5");
    }

    #[tokio::test]
    async fn test_fetch_preserves_insertion_order() {
        let books: MemoryCollection<Book> = MemoryCollection::new();
        for name in ["A", "B", "C"] {
            books.add(BookDraft::new(name, "1")).await.unwrap();
        }
        let names: Vec<_> = books
            .fetch_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let books: MemoryCollection<Book> = MemoryCollection::new();
        assert!(books.fetch_by_id("9").await.unwrap().is_none());
        assert!(matches!(
            books.update("9", BookPatch::default()).await,
            Err(LibraryError::NotFound { kind: "book", .. })
        ));
        assert!(matches!(
            books.delete("9").await,
            Err(LibraryError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_changes_stored_record() {
        let authors: MemoryCollection<Author> = MemoryCollection::new();
        let author = authors.add(AuthorDraft::new("Tolkein")).await.unwrap();
        authors
            .update(&author.id, AuthorPatch { name: "Tolkien".to_string() })
            .await
            .unwrap();
        let stored = authors.fetch_by_id(&author.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Tolkien");
    }
}
