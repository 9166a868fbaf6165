use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from the backing store file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read store file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse store file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write store file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A synchronous, process-local key/value store backed by one JSON file.
///
/// Every mutation rewrites the file, so whatever is in memory is also on
/// disk by the time `set`/`remove` return.
#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl KvStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store; the file is only created on
    /// first write. An unreadable or unparsable file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| StorageError::Read {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&content).map_err(|e| StorageError::Parse {
                path: path.clone(),
                source: e,
            })?
        } else {
            HashMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Default store location, `<config dir>/pocketdex/store.json`.
    ///
    /// Falls back to the current directory if the platform config dir is
    /// unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pocketdex").join("store.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.into());
        self.flush()
    }

    /// Remove `key`. Removing an absent key is a no-op.
    pub fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|e| StorageError::Parse {
                path: self.path.clone(),
                source: e,
            })?;
        fs::write(&self.path, content).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}
