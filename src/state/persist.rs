use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to access state storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize state: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Key-value storage for the persisted filter and ignore lists.
///
/// The engine is written against this trait rather than a concrete storage
/// medium; an absent key is equivalent to an empty list. Implementations
/// must make a completed `save` durable before returning so a mutation is
/// never acknowledged while the persisted state is stale.
pub trait KvStore {
    /// Load the value stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, StateError>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StateError>;

    /// Remove `key` if present; absence is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StateError>;
}

/// In-memory store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StateError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StateError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// State format version for compatibility checking
pub const STATE_VERSION: u32 = 1;

/// Metadata written alongside the state files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateMetadata {
    pub version: u32,
    pub saved_at: String,
}

/// Directory-backed store: one file per key, plus a `meta.json` stamp.
///
/// Each key maps to `<dir>/<key>.json` holding the raw serialized value.
/// Keys are internal constants, never user input, so no path sanitizing is
/// done here.
#[derive(Debug)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Open (creating if needed) a state directory.
    ///
    /// # Errors
    ///
    /// Returns `StateError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StateError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn meta_path(&self) -> PathBuf {
        self.dir.join("meta.json")
    }

    fn write_meta(&self) -> Result<(), StateError> {
        let meta = StateMetadata {
            version: STATE_VERSION,
            saved_at: chrono::Utc::now().to_rfc3339(),
        };
        std::fs::write(self.meta_path(), serde_json::to_string_pretty(&meta)?)?;
        Ok(())
    }
}

impl KvStore for DirStore {
    fn load(&self, key: &str) -> Result<Option<String>, StateError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        std::fs::write(self.key_path(key), value)?;
        self.write_meta()
    }

    fn remove(&mut self, key: &str) -> Result<(), StateError> {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => self.write_meta(),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Default per-user state directory.
#[must_use]
pub fn default_state_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fusion-solver")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.load("filter_list").unwrap().is_none());

        store.save("filter_list", "[\"a\"]").unwrap();
        assert_eq!(store.load("filter_list").unwrap().unwrap(), "[\"a\"]");

        store.remove("filter_list").unwrap();
        assert!(store.load("filter_list").unwrap().is_none());
    }

    #[test]
    fn test_dir_store_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirStore::open(tmp.path().join("state")).unwrap();

        assert!(store.load("ignore_list").unwrap().is_none());
        store.save("ignore_list", "[\"x\",\"y\"]").unwrap();

        // A fresh handle sees the saved value.
        let store2 = DirStore::open(tmp.path().join("state")).unwrap();
        assert_eq!(
            store2.load("ignore_list").unwrap().unwrap(),
            "[\"x\",\"y\"]"
        );

        store.remove("ignore_list").unwrap();
        assert!(store.load("ignore_list").unwrap().is_none());
        // Removing an absent key is a no-op.
        store.remove("ignore_list").unwrap();
    }

    #[test]
    fn test_dir_store_writes_metadata() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirStore::open(tmp.path()).unwrap();
        store.save("filter_list", "[]").unwrap();

        let meta: StateMetadata = serde_json::from_str(
            &std::fs::read_to_string(tmp.path().join("meta.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(meta.version, STATE_VERSION);
    }
}
