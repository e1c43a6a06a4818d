//! Key-value store abstraction.
//!
//! The project collection is persisted as one serialized blob under a
//! well-known key, in the manner of a browser's local storage. [`FileStore`]
//! maps each key to a file in a directory; [`MemoryStore`] keeps values in a
//! map and can enforce a byte capacity so tests can exercise the
//! rejected-write path without filling a real disk.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::{StorageError, StorageResult};

/// Minimal string-keyed blob store.
///
/// `get` returning `Ok(None)` means "nothing stored under that key" and is
/// not an error.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

/// File-backed store: one file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Opens the store in the platform data directory.
    pub fn open_default() -> StorageResult<Self> {
        let base = dirs::data_dir().ok_or_else(|| {
            StorageError::StoreDirectory("no platform data directory".to_string())
        })?;
        Self::open(base.join("redline"))
    }

    /// The directory backing this store.
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> StorageResult<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store with an optional byte capacity.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects any write that would push the total stored
    /// bytes (keys plus values) past `capacity`.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            values: HashMap::new(),
            capacity: Some(capacity),
        }
    }

    fn stored_bytes_excluding(&self, key: &str) -> usize {
        self.values
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(capacity) = self.capacity {
            let size = self.stored_bytes_excluding(key) + key.len() + value.len();
            if size > capacity {
                return Err(StorageError::CapacityExceeded { size, capacity });
            }
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.put("k", "value").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("value"));

        store.put("k", "replaced").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("replaced"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_memory_store_enforces_capacity() {
        let mut store = MemoryStore::with_capacity_limit(16);
        store.put("k", "short").unwrap();

        let err = store.put("k", "a value far past sixteen bytes").unwrap_err();
        assert!(matches!(err, StorageError::CapacityExceeded { .. }));

        // The rejected write leaves the prior value untouched.
        assert_eq!(store.get("k").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_capacity_accounts_for_replacement_not_sum() {
        let mut store = MemoryStore::with_capacity_limit(16);
        store.put("k", "0123456789").unwrap();
        // Replacing the value is measured against the replacement, not the
        // old value plus the new one.
        store.put("k", "9876543210").unwrap();
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert_eq!(store.get("projects").unwrap(), None);
        store.put("projects", "[]").unwrap();
        assert_eq!(store.get("projects").unwrap().as_deref(), Some("[]"));

        // A second store over the same directory sees the value.
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("projects").unwrap().as_deref(), Some("[]"));

        store.remove("projects").unwrap();
        assert_eq!(store.get("projects").unwrap(), None);
        // Removing an absent key is not an error.
        store.remove("projects").unwrap();
    }
}
