use crate::error::{LibraryError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".bookshelf.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Memory,
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreKind,

    /// Preload sample books and authors into the memory backend
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteSettings>,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            backend: StoreKind::default(),
            seed: default_seed(),
            remote: None,
        }
    }
}

/// Endpoints of the spreadsheet proxy, one per sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    pub books_url: String,

    pub authors_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl RemoteSettings {
    pub fn new(books_url: impl Into<String>, authors_url: impl Into<String>) -> Self {
        Self {
            books_url: books_url.into(),
            authors_url: authors_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Placeholder endpoints written by `bookshelf init --remote`.
    pub fn placeholder() -> Self {
        Self::new(
            "https://sheets.example.com/api?key=YOUR_KEY&gid=BOOKS_SHEET",
            "https://sheets.example.com/api?key=YOUR_KEY&gid=AUTHORS_SHEET",
        )
    }
}

impl BookshelfConfig {
    pub fn remote(settings: RemoteSettings) -> Self {
        Self {
            server: ServerSettings::default(),
            store: StoreSettings {
                backend: StoreKind::Remote,
                seed: false,
                remote: Some(settings),
            },
        }
    }

    /// Load the nearest `.bookshelf.yml` at or above `start_path`.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let config = Self::load_from(&config_path)?;
        Ok((config, config_path))
    }

    /// Like [`BookshelfConfig::load`], falling back to defaults when no file exists.
    pub fn load_or_default(start_path: &Path) -> Result<Self> {
        match Self::load(start_path) {
            Ok((config, path)) => {
                tracing::debug!(path = %path.display(), "Loaded configuration");
                Ok(config)
            }
            Err(LibraryError::NotInitialized) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BookshelfConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(LibraryError::NotInitialized);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.store.backend != StoreKind::Remote {
            return Ok(());
        }
        let remote = self.store.remote.as_ref().ok_or_else(|| {
            LibraryError::Config("remote backend selected but `store.remote` is missing".to_string())
        })?;
        if remote.books_url.is_empty() || remote.authors_url.is_empty() {
            return Err(LibraryError::Config(
                "remote backend needs both `books_url` and `authors_url`".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config: BookshelfConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.store.backend, StoreKind::Memory);
        assert!(config.store.seed);
        assert_eq!(config.listen_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_remote_requires_urls() {
        let yaml = "store:\n  backend: remote\n";
        let config: BookshelfConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(config.validate(), Err(LibraryError::Config(_))));

        let yaml = "store:\n  backend: remote\n  remote:\n    books_url: http://a\n    authors_url: ''\n";
        let config: BookshelfConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = BookshelfConfig::remote(RemoteSettings::new("http://b", "http://a"));
        config.save(&temp_dir.path().join(CONFIG_FILE)).unwrap();

        let (loaded, path) = BookshelfConfig::load(&nested).unwrap();
        assert_eq!(path, temp_dir.path().join(CONFIG_FILE));
        assert_eq!(loaded.store.backend, StoreKind::Remote);
        assert_eq!(loaded.store.remote.unwrap().timeout_secs, 10);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = BookshelfConfig::load_or_default(temp_dir.path()).unwrap();
        assert_eq!(config.store.backend, StoreKind::Memory);
    }
}
