use super::schema::library;
use crate::model;
use crate::storage::Repository;
use async_graphql::{ComplexObject, Context, ErrorExtensions, ID, SimpleObject};

/// This represents a book written by an author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub name: String,
    pub author_id: ID,
    pub original_language: Option<String>,
    pub first_published: Option<String>,
    pub approximate_sales: Option<String>,
    pub genre: Option<String>,
}

#[ComplexObject]
impl Book {
    /// The author this book points at, or null if it points at no one
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author = library(ctx)?
            .authors
            .fetch_by_id(&self.author_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(author.map(Author::from))
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: ID(b.id),
            name: b.name,
            author_id: ID(b.author_id),
            original_language: b.original_language,
            first_published: b.first_published,
            approximate_sales: b.approximate_sales,
            genre: b.genre,
        }
    }
}

/// This represents the author of a book
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Every book whose authorId is this author's id
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = library(ctx)?
            .books_by(&self.id)
            .await
            .map_err(|e| e.extend())?;
        Ok(books.into_iter().map(Book::from).collect())
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
        }
    }
}
