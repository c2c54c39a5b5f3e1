//! Document storage for persisted plugin state.
//!
//! Each component owns one named JSON document (`tpatool_homes.json`,
//! `tpatool_graves.json`, ...). Load and save failures are logged and never
//! abort the operation that triggered them.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rustc_hash::FxHashMap;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tpatools_utils::locks::SyncMutex;

/// An error while reading or writing a stored document.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The document path.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The document is not valid JSON for the expected shape.
    #[error("Malformed document {name}: {source}")]
    Malformed {
        /// The document name.
        name: String,
        /// The underlying error.
        source: serde_json::Error,
    },
}

/// A place to keep named text documents.
pub trait StateStore: Send + Sync {
    /// Reads a document, `Ok(None)` when it was never written.
    fn load(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Replaces a document.
    fn save(&self, name: &str, contents: &str) -> Result<(), StorageError>;
}

/// Stores documents as files in one directory (`config/tpatools` by default).
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Opens the store, creating the directory if it is missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
                path: dir.clone(),
                source,
            })?;
            log::info!("Created config directory: {}", dir.display());
        }
        Ok(Self { dir })
    }

    /// The directory documents live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, name: &str) -> Result<Option<String>, StorageError> {
        let path = self.dir.join(name);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn save(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!("{name}.tmp"));
        fs::write(&tmp, contents)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|source| StorageError::Io { path, source })
    }
}

/// Keeps documents in memory. Used by tests and the sandbox `--ephemeral` mode.
#[derive(Default)]
pub struct MemoryStore {
    documents: SyncMutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, name: &str) -> Result<Option<String>, StorageError> {
        Ok(self.documents.lock().get(name).cloned())
    }

    fn save(&self, name: &str, contents: &str) -> Result<(), StorageError> {
        self.documents
            .lock()
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

/// Loads and parses a JSON document. Missing or broken documents yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn StateStore, name: &str) -> Option<T> {
    let contents = match store.load(name) {
        Ok(Some(contents)) => contents,
        Ok(None) => {
            log::debug!("No {name} stored yet");
            return None;
        }
        Err(e) => {
            log::error!("Failed to load {name}: {e}");
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => {
            log::debug!("Loaded {name}");
            Some(value)
        }
        Err(source) => {
            let e = StorageError::Malformed {
                name: name.to_string(),
                source,
            };
            log::error!("Failed to load {name}: {e}");
            None
        }
    }
}

/// Serializes and writes a JSON document, logging any failure.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn StateStore, name: &str, value: &T) {
    let contents = match serde_json::to_string_pretty(value) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to serialize {name}: {e}");
            return;
        }
    };
    match store.save(name, &contents) {
        Ok(()) => log::debug!("Saved {name}"),
        Err(e) => log::error!("Failed to save {name}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeMap, env, process};

    use super::*;

    #[test]
    fn memory_store_round_trips_documents() {
        let store = MemoryStore::new();
        let mut value = BTreeMap::new();
        value.insert("tpa".to_string(), true);
        save_json(&store, "tpatool.json", &value);
        let loaded: Option<BTreeMap<String, bool>> = load_json(&store, "tpatool.json");
        assert_eq!(loaded, Some(value));
    }

    #[test]
    fn malformed_document_loads_as_none() {
        let store = MemoryStore::new();
        store.save("broken.json", "{ not json").expect("memory store");
        let loaded: Option<BTreeMap<String, bool>> = load_json(&store, "broken.json");
        assert!(loaded.is_none());
    }

    #[test]
    fn file_store_creates_directory_and_reads_back() {
        let dir = env::temp_dir().join(format!("tpatools-store-{}", process::id()));
        let _ = fs::remove_dir_all(&dir);
        let store = JsonFileStore::open(dir.join("nested")).expect("open store");
        assert!(store.load("missing.json").expect("load").is_none());
        store.save("doc.json", "{}").expect("save");
        assert_eq!(store.load("doc.json").expect("load").as_deref(), Some("{}"));
        let _ = fs::remove_dir_all(&dir);
    }
}
