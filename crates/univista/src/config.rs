//! Portal configuration.
//!
//! Plain data with defaults. Build it in code with the `with_*` methods or
//! load it from a JSON file:
//!
//! ```json
//! {
//!   "default_language": "ar",
//!   "storage": { "kind": "file", "path": "/var/lib/univista/state.json" }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use univista_locale::Language;
use univista_storage::{FileStorage, MemoryStorage, Storage, StorageError};

use crate::UniVistaError;

/// Top-level portal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Language used when nothing is saved yet.
    pub default_language: Language,
    /// Where durable state lives.
    pub storage: StorageConfig,
}

/// Which durable storage backend to use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Forgotten when the process exits.
    #[default]
    Memory,
    /// A JSON file, written through on every change.
    File { path: PathBuf },
}

impl PortalConfig {
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    pub fn with_storage(mut self, storage: StorageConfig) -> Self {
        self.storage = storage;
        self
    }

    /// Parses a configuration from JSON. Missing fields take their
    /// defaults.
    pub fn from_json_str(json: &str) -> Result<Self, UniVistaError> {
        serde_json::from_str(json).map_err(UniVistaError::ConfigParse)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(
        path: impl AsRef<Path>,
    ) -> Result<Self, UniVistaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            UniVistaError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }
}

impl StorageConfig {
    /// Opens the configured backend.
    ///
    /// # Errors
    /// Fails if a storage file exists but can't be read or parsed.
    pub fn open(&self) -> Result<ConfiguredStorage, StorageError> {
        match self {
            Self::Memory => {
                Ok(ConfiguredStorage::Memory(MemoryStorage::new()))
            }
            Self::File { path } => {
                let storage = FileStorage::open(path)?;
                tracing::info!(
                    path = %storage.path().display(),
                    "using file storage"
                );
                Ok(ConfiguredStorage::File(storage))
            }
        }
    }
}

/// Storage chosen at runtime from a [`StorageConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredStorage {
    Memory(MemoryStorage),
    File(FileStorage),
}

impl Storage for ConfiguredStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Memory(s) => s.get(key),
            Self::File(s) => s.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(s) => s.set(key, value),
            Self::File(s) => s.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(s) => s.remove(key),
            Self::File(s) => s.remove(key),
        }
    }
}
