//! Cache error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    /// The data directory could not be created.
    #[error("Cannot open data directory {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored value is not valid JSON for the requested type, or a value
    /// could not be encoded.
    #[error("Invalid cached value: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
