//! # Redline Storage
//!
//! Durable persistence for the feedback workspace: a key-value store
//! abstraction with file-backed and in-memory implementations, and
//! whole-collection JSON persistence layered on top of it.
//!
//! Persistence is whole-collection, not incremental: every
//! mutation re-serializes the full project collection as one blob. Design
//! images are embedded as data URIs, so large uploads inflate every
//! subsequent save; the capacity error path exists for exactly that case.

pub mod error;
pub mod kv;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use persistence::WorkspacePersistence;
