use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Couldn't find {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Upstream sent an invalid payload: {0}")]
    UpstreamPayload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project not initialized. Run 'bookshelf init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl LibraryError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Machine-readable code attached to GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Upstream(_) | Self::UpstreamStatus { .. } => "UPSTREAM_UNAVAILABLE",
            Self::UpstreamPayload(_) => "UPSTREAM_INVALID",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for LibraryError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = LibraryError::not_found("book", "7");
        assert_eq!(err.to_string(), "Couldn't find book with id 7");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_extend_sets_code() {
        let err = LibraryError::UpstreamPayload("missing data".to_string()).extend();
        assert_eq!(
            err.message,
            "Upstream sent an invalid payload: missing data"
        );
        assert!(err.extensions.is_some());
    }
}
