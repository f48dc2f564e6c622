use super::record::Record;
use super::wire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,

    pub name: String,

    #[serde(deserialize_with = "wire::id")]
    pub author_id: String,

    #[serde(
        default,
        deserialize_with = "wire::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_language: Option<String>,

    #[serde(
        default,
        deserialize_with = "wire::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_published: Option<String>,

    #[serde(
        default,
        deserialize_with = "wire::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub approximate_sales: Option<String>,

    #[serde(
        default,
        deserialize_with = "wire::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub genre: Option<String>,
}

impl Book {
    pub fn new(id: String, name: String, author_id: String) -> Self {
        Self {
            id,
            name,
            author_id,
            original_language: None,
            first_published: None,
            approximate_sales: None,
            genre: None,
        }
    }

    pub fn is_by(&self, author_id: &str) -> bool {
        self.author_id == author_id
    }
}

/// Fields of a book that has not been stored yet.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub name: String,
    pub author_id: String,
    pub original_language: Option<String>,
    pub first_published: Option<String>,
    pub approximate_sales: Option<String>,
    pub genre: Option<String>,
}

impl BookDraft {
    pub fn new(name: impl Into<String>, author_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author_id: author_id.into(),
            ..Self::default()
        }
    }

    pub fn with_original_language(mut self, original_language: Option<String>) -> Self {
        self.original_language = original_language;
        self
    }

    pub fn with_first_published(mut self, first_published: Option<String>) -> Self {
        self.first_published = first_published;
        self
    }

    pub fn with_approximate_sales(mut self, approximate_sales: Option<String>) -> Self {
        self.approximate_sales = approximate_sales;
        self
    }

    pub fn with_genre(mut self, genre: Option<String>) -> Self {
        self.genre = genre;
        self
    }
}

/// Changes to apply to a stored book.
///
/// `name` and `author_id` are overwritten when present. The descriptive
/// fields use a double option: `None` leaves the field alone, `Some(None)`
/// clears it and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default)]
pub struct BookPatch {
    pub name: Option<String>,
    pub author_id: Option<String>,
    pub original_language: Option<Option<String>>,
    pub first_published: Option<Option<String>>,
    pub approximate_sales: Option<Option<String>>,
    pub genre: Option<Option<String>>,
}

impl Record for Book {
    type Draft = BookDraft;
    type Patch = BookPatch;

    const KIND: &'static str = "book";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: BookDraft) -> Self {
        Self {
            id,
            name: draft.name,
            author_id: draft.author_id,
            original_language: draft.original_language,
            first_published: draft.first_published,
            approximate_sales: draft.approximate_sales,
            genre: draft.genre,
        }
    }

    fn apply(&mut self, patch: BookPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(author_id) = patch.author_id {
            self.author_id = author_id;
        }
        if let Some(v) = patch.original_language {
            self.original_language = v;
        }
        if let Some(v) = patch.first_published {
            self.first_published = v;
        }
        if let Some(v) = patch.approximate_sales {
            self.approximate_sales = v;
        }
        if let Some(v) = patch.genre {
            self.genre = v;
        }
    }
}
