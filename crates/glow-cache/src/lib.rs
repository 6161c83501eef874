//! Type-safe key-value persistence layer for the Glow storefront.
//!
//! Provides a small, ergonomic API for keeping client-side state (the cart,
//! most importantly) in a key-value store with automatic JSON serialization.
//! Two backends ship with the crate:
//!
//! - [`MemoryStore`] - process-local map, cloned handles share one map
//! - [`FileStore`] - one JSON file per key under a data directory
//!
//! # Example
//!
//! ```rust,ignore
//! use glow_cache::{Cache, MemoryStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct CartLine {
//!     product_id: String,
//!     quantity: u32,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! // Store a value
//! cache.set("cart", &lines)?;
//!
//! // Retrieve a value
//! let lines: Option<Vec<CartLine>> = cache.get("cart")?;
//!
//! // Delete a value
//! cache.delete("cart")?;
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
