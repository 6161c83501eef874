//! Key-value store wrapper with automatic serialization.

use std::path::Path;

use crate::{CacheError, FileStore, KvStore, MemoryStore};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over any [`KvStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S = MemoryStore> {
    store: S,
}

impl Cache<MemoryStore> {
    /// Open a fresh in-memory cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::in_memory();
    /// ```
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl Cache<FileStore> {
    /// Open a file-backed cache rooted at a directory.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::open("~/.local/share/glow")?;
    /// ```
    pub fn open(root: impl AsRef<Path>) -> Result<Self, CacheError> {
        Ok(Self::new(FileStore::open(root)?))
    }
}

impl<S: KvStore> Cache<S> {
    /// Wrap an existing store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and an error if the stored
    /// bytes don't deserialize into `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lines: Option<Vec<CartLine>> = cache.get("cart")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("cart", &lines)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
