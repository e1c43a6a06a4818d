//! Error types for the storage crate.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing the backing store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The store directory could not be found or created.
    #[error("Store directory error: {0}")]
    StoreDirectory(String),

    /// The backing store refused the write.
    #[error("Store rejected write of {size} bytes (capacity {capacity})")]
    CapacityExceeded { size: usize, capacity: usize },

    /// I/O error during store operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
