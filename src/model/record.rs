use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type that can be kept by a storage backend.
///
/// `Draft` carries the fields of a record that has not been assigned an id
/// yet. `Patch` carries the changes of an update, with absent fields left
/// untouched by [`Record::apply`].
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Draft: Send;
    type Patch: Send;

    /// Lowercase label used in messages and logs, e.g. `book`.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn from_draft(id: String, draft: Self::Draft) -> Self;

    fn apply(&mut self, patch: Self::Patch);
}
