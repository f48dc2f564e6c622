use super::record::Record;
use super::wire;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorDraft {
    pub name: String,
}

impl AuthorDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An author update always carries the new name.
#[derive(Debug, Clone)]
pub struct AuthorPatch {
    pub name: String,
}

impl Record for Author {
    type Draft = AuthorDraft;
    type Patch = AuthorPatch;

    const KIND: &'static str = "author";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(id: String, draft: AuthorDraft) -> Self {
        Self::new(id, draft.name)
    }

    fn apply(&mut self, patch: AuthorPatch) {
        self.name = patch.name;
    }
}
