//! Whole-collection persistence.
//!
//! The entire project collection is saved as a single JSON blob under
//! [`STORAGE_KEY`](redline_core::constants::STORAGE_KEY). Loading is
//! fail-soft: a missing, unreadable, or shape-mismatched blob yields the
//! empty collection instead of an error. Saving propagates failures so the
//! caller can warn the user; the in-memory collection is never rolled back.

use redline_core::constants::STORAGE_KEY;
use redline_core::Project;
use tracing::{debug, warn};

use crate::error::StorageResult;
use crate::kv::KeyValueStore;

/// Load/save front for the project collection over any [`KeyValueStore`].
pub struct WorkspacePersistence {
    store: Box<dyn KeyValueStore>,
}

impl WorkspacePersistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the previously saved collection, or the empty collection if
    /// nothing was saved or the stored payload does not parse. Read
    /// failures are logged, never surfaced.
    pub fn load(&self) -> Vec<Project> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no saved collection, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!("failed to read saved collection, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(projects) => projects,
            Err(e) => {
                warn!("saved collection is unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Serializes and writes the full collection as one blob, replacing
    /// any prior value.
    pub fn save(&mut self, projects: &[Project]) -> StorageResult<()> {
        let blob = serde_json::to_string(projects)?;
        self.store.put(STORAGE_KEY, &blob)?;
        debug!("saved {} project(s), {} bytes", projects.len(), blob.len());
        Ok(())
    }
}
