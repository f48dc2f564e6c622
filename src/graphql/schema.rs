use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, MaybeUndefined, Object, Schema};

use crate::model::{AuthorDraft, AuthorPatch, BookDraft, BookPatch};
use crate::storage::{Library, Repository};

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(library: Library) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(Arc::new(library))
        .finish()
}

pub(super) fn library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Library> {
    ctx.data::<Arc<Library>>().map(Arc::as_ref)
}

fn presence(value: MaybeUndefined<String>) -> Option<Option<String>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Book>> {
        let book = library(ctx)?
            .books
            .fetch_by_id(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(book.map(Book::from))
    }

    /// A list of books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = library(ctx)?
            .books
            .fetch_all()
            .await
            .map_err(|e| e.extend())?;
        Ok(books.into_iter().map(Book::from).collect())
    }

    /// Information about an author
    async fn author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Author>> {
        let author = library(ctx)?
            .authors
            .fetch_by_id(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(author.map(Author::from))
    }

    /// A list of authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let authors = library(ctx)?
            .authors
            .fetch_all()
            .await
            .map_err(|e| e.extend())?;
        Ok(authors.into_iter().map(Author::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a book. The author id is stored as given.
    #[allow(clippy::too_many_arguments)]
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: ID,
        original_language: Option<String>,
        first_published: Option<String>,
        approximate_sales: Option<String>,
        genre: Option<String>,
    ) -> async_graphql::Result<Book> {
        let draft = BookDraft::new(name, author_id.0)
            .with_original_language(original_language)
            .with_first_published(first_published)
            .with_approximate_sales(approximate_sales)
            .with_genre(genre);
        let book = library(ctx)?
            .books
            .add(draft)
            .await
            .map_err(|e| e.extend())?;
        Ok(book.into())
    }

    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> async_graphql::Result<Author> {
        let author = library(ctx)?
            .authors
            .add(AuthorDraft::new(name))
            .await
            .map_err(|e| e.extend())?;
        Ok(author.into())
    }

    /// Update a book. Omitted arguments leave the stored value alone; an
    /// explicit null clears a descriptive field.
    #[allow(clippy::too_many_arguments)]
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        author_id: Option<ID>,
        original_language: MaybeUndefined<String>,
        first_published: MaybeUndefined<String>,
        approximate_sales: MaybeUndefined<String>,
        genre: MaybeUndefined<String>,
    ) -> async_graphql::Result<Book> {
        let patch = BookPatch {
            name,
            author_id: author_id.map(|id| id.0),
            original_language: presence(original_language),
            first_published: presence(first_published),
            approximate_sales: presence(approximate_sales),
            genre: presence(genre),
        };
        let book = library(ctx)?
            .books
            .update(&id, patch)
            .await
            .map_err(|e| e.extend())?;
        Ok(book.into())
    }

    /// Update the author info
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
    ) -> async_graphql::Result<Author> {
        let author = library(ctx)?
            .authors
            .update(&id, AuthorPatch { name })
            .await
            .map_err(|e| e.extend())?;
        Ok(author.into())
    }

    /// Delete a book
    async fn delete_book(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<String> {
        library(ctx)?
            .books
            .delete(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(format!("Book with id {} has been deleted.", id.as_str()))
    }

    /// Delete an author. Books pointing at the author are kept.
    async fn delete_author(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<String> {
        library(ctx)?
            .authors
            .delete(&id)
            .await
            .map_err(|e| e.extend())?;
        Ok(format!("Author with id {} has been deleted", id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_distinguishes_null_from_omitted() {
        assert_eq!(presence(MaybeUndefined::Undefined), None);
        assert_eq!(presence(MaybeUndefined::Null), Some(None));
        assert_eq!(
            presence(MaybeUndefined::Value("Fantasy".to_string())),
            Some(Some("Fantasy".to_string()))
        );
    }

    #[test]
    fn test_sdl_exposes_operations() {
        let sdl = build_schema(Library::empty()).sdl();
        for field in [
            "book(id: ID!): Book",
            "books: [Book!]!",
            "addBook(",
            "updateBook(",
            "deleteAuthor(id: ID!): String!",
        ] {
            assert!(sdl.contains(field), "missing {field}");
        }
    }
}
