//! Records kept in a spreadsheet behind an HTTP proxy.
//!
//! The proxy exposes one URL per sheet. `GET` answers `{"data": [...]}` with
//! every row, `POST` takes a whole row as JSON and `DELETE ?id=` drops the
//! row with that id. There is no server-side filtering, so every read pulls
//! the full sheet and searches it locally.

use super::repository::Repository;
use crate::config::RemoteSettings;
use crate::error::{LibraryError, Result};
use crate::model::Record;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use std::marker::PhantomData;
use std::time::Duration;

const ID_LENGTH: usize = 12;

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Build the HTTP client shared by both sheets.
pub fn http_client(settings: &RemoteSettings) -> Result<Client> {
    // reqwest is built without a bundled crypto provider; a second install is a no-op.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

pub struct RemoteCollection<E> {
    client: Client,
    url: Url,
    _record: PhantomData<fn() -> E>,
}

impl<E: Record> RemoteCollection<E> {
    pub fn new(client: Client, url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| LibraryError::Config(format!("invalid {} sheet URL '{}': {}", E::KIND, url, e)))?;
        Ok(Self {
            client,
            url,
            _record: PhantomData,
        })
    }

    fn generate_id() -> String {
        const ALPHABET: [char; 36] = [
            '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
            'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x',
            'y', 'z',
        ];
        nanoid::format(nanoid::rngs::default, &ALPHABET, ID_LENGTH)
    }

    async fn fetch_sheet(&self) -> Result<Vec<E>> {
        tracing::debug!(kind = E::KIND, url = %self.url, "Fetching sheet");

        let response = self.client.get(self.url.clone()).send().await;
        let response = self.check(response)?;
        let body = response.bytes().await?;
        let envelope: Envelope<Vec<E>> = serde_json::from_slice(&body)
            .map_err(|e| LibraryError::UpstreamPayload(format!("{} sheet: {}", E::KIND, e)))?;
        Ok(envelope.data)
    }

    async fn post_row(&self, record: &E) -> Result<()> {
        tracing::debug!(kind = E::KIND, id = %record.id(), "Posting row");

        let response = self
            .client
            .post(self.url.clone())
            .json(record)
            .send()
            .await;
        self.check(response)?;
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<E> {
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| LibraryError::not_found(E::KIND, id))
    }

    fn check(&self, response: reqwest::Result<Response>) -> Result<Response> {
        let response = response.inspect_err(|e| {
            tracing::warn!(kind = E::KIND, error = %e, "Sheet request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(kind = E::KIND, status = %status, "Sheet answered with an error status");
            return Err(LibraryError::UpstreamStatus {
                status,
                url: self.url.to_string(),
            });
        }
        Ok(response)
    }
}

impl<E: Record> Repository<E> for RemoteCollection<E> {
    async fn fetch_all(&self) -> Result<Vec<E>> {
        self.fetch_sheet().await
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<E>> {
        let rows = self.fetch_sheet().await?;
        Ok(rows.into_iter().find(|r| r.id() == id))
    }

    async fn add(&self, draft: E::Draft) -> Result<E> {
        let record = E::from_draft(Self::generate_id(), draft);
        tracing::info!(kind = E::KIND, id = %record.id(), "Creating record");

        self.post_row(&record).await?;
        Ok(record)
    }

    async fn update(&self, id: &str, patch: E::Patch) -> Result<E> {
        tracing::info!(kind = E::KIND, id = %id, "Updating record");

        let mut record = self.find(id).await?;
        record.apply(patch);
        self.post_row(&record).await?;
        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        tracing::info!(kind = E::KIND, id = %id, "Deleting record");

        self.find(id).await?;

        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("id", id);
        let response = self.client.delete(url).send().await;
        self.check(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = RemoteCollection::<Book>::generate_id();
        let b = RemoteCollection::<Book>::generate_id();
        assert_eq!(a.len(), ID_LENGTH);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_invalid_url() {
        let client = http_client(&RemoteSettings::new("x", "y")).unwrap();
        let result = RemoteCollection::<Book>::new(client, "not a url");
        assert!(matches!(result, Err(LibraryError::Config(_))));
    }
}
