//! Raw key-value store backends.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::CacheError;

/// A byte-oriented key-value store.
///
/// Implementations take `&self` for every operation so a store can be shared
/// by reference between the owners that read and write through it.
pub trait KvStore {
    /// Get the raw value for a key, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Set the raw value for a key, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Delete a key. Deleting an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check whether a key exists.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }

    /// List all keys in the store.
    fn keys(&self) -> Result<Vec<String>, CacheError>;
}

/// In-memory store.
///
/// Clones share the same underlying map, which makes it possible to drop one
/// owner and "restart" with another over the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys held.
    pub fn len(&self) -> Result<usize, CacheError> {
        Ok(self.entries.read().map_err(|_| poisoned())?.len())
    }

    /// Check if the store holds no keys.
    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> CacheError {
    CacheError::Unavailable("memory store lock poisoned".to_string())
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.contains_key(key))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(entries.keys().cloned().collect())
    }
}

/// File-backed store: one `<key>.json` file per key inside a directory.
///
/// Characters outside `[A-Za-z0-9._-]` in a key are written as `_`, so keys
/// that differ only in such characters share a file.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, CacheError> {
        let root = root.as_ref().to_path_buf();
        if let Err(source) = fs::create_dir_all(&root) {
            return Err(CacheError::Open { path: root, source });
        }
        tracing::debug!(root = %root.display(), "opened file store");
        Ok(Self { root })
    }

    /// Directory holding the store files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{}.json", name))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let path = self.path_for(key);
        // Readers see the old value or the new one, never a partial write.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.path_for(key).is_file())
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().map_or(false, |e| e == "json") {
                if let Some(stem) = path.file_stem() {
                    keys.push(stem.to_string_lossy().into_owned());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());

        store.set("cart", b"[]").unwrap();
        assert_eq!(store.get("cart").unwrap(), Some(b"[]".to_vec()));
        assert!(store.exists("cart").unwrap());
        assert_eq!(store.len().unwrap(), 1);

        store.delete("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        assert!(!store.exists("cart").unwrap());
    }

    #[test]
    fn test_memory_store_clones_share_data() {
        let a = MemoryStore::new();
        let b = a.clone();

        a.set("k", b"v").unwrap();
        assert_eq!(b.get("k").unwrap(), Some(b"v".to_vec()));
    }

    #[test]
    fn test_memory_store_reports_poisoned_lock() {
        let store = MemoryStore::new();
        store.set("cart", b"[]").unwrap();

        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.entries.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(store.len(), Err(CacheError::Unavailable(_))));
        assert!(store.is_empty().is_err());
        assert!(store.get("cart").is_err());
    }

    #[test]
    fn test_memory_store_delete_missing_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete("missing").is_ok());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("data")).unwrap();

        assert_eq!(store.get("cart").unwrap(), None);
        store.set("cart", br#"[{"q":1}]"#).unwrap();
        assert_eq!(store.get("cart").unwrap(), Some(br#"[{"q":1}]"#.to_vec()));
        assert!(store.root().join("cart.json").is_file());

        store.delete("cart").unwrap();
        assert!(!store.exists("cart").unwrap());
        assert!(store.delete("cart").is_ok());
    }

    #[test]
    fn test_file_store_keys_and_sanitizing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.set("cart", b"1").unwrap();
        store.set("orders:2024", b"2").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["cart", "orders_2024"]);
        assert_eq!(store.get("orders:2024").unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn test_file_store_reopen_sees_previous_values() {
        let dir = tempfile::tempdir().unwrap();
        FileStore::open(dir.path()).unwrap().set("cart", b"x").unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("cart").unwrap(), Some(b"x".to_vec()));
    }
}
