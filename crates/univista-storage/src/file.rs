//! File-backed storage.
//!
//! The whole store is one JSON object (`{"token": "...", "user": "..."}`)
//! kept in memory and written through to disk on every change. A change is
//! committed to memory only after the file write succeeds, so the in-memory
//! view never runs ahead of what a restart would see.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::{Storage, StorageError};

/// [`Storage`] persisted to a JSON file.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl FileStorage {
    /// Opens the store at `path`, loading existing entries.
    ///
    /// A missing file is an empty store; it is created on the first write.
    ///
    /// # Errors
    /// - [`StorageError::Io`]: the file exists but can't be read
    /// - [`StorageError::Corrupt`]: the file isn't a JSON object of strings
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => HashMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(
                |source| StorageError::Corrupt {
                    path: path.clone(),
                    source,
                },
            )?,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(source) => {
                return Err(StorageError::Io { path, source });
            }
        };

        tracing::debug!(
            path = %path.display(),
            keys = entries.len(),
            "storage file opened"
        );

        Ok(Self {
            path,
            entries: Arc::new(Mutex::new(entries)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `change` to a copy of the entries, writes the copy, and
    /// only then swaps it in.
    fn write_through(
        &self,
        change: impl FnOnce(&mut HashMap<String, String>),
    ) -> Result<(), StorageError> {
        let mut entries =
            self.entries.lock().map_err(|_| StorageError::Poisoned)?;

        let mut next = entries.clone();
        change(&mut next);

        let contents =
            serde_json::to_string_pretty(&next).map_err(StorageError::Encode)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| {
                    StorageError::Io {
                        path: self.path.clone(),
                        source,
                    }
                })?;
            }
        }
        fs::write(&self.path, contents).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;

        *entries = next;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries =
            self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write_through(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.write_through(|entries| {
            entries.remove(key);
        })
    }
}
