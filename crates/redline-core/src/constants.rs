//! Workspace-wide constants.

/// Key under which the whole project collection is persisted in the
/// key-value store.
pub const STORAGE_KEY: &str = "redline_projects";

/// Fixed administrative passphrase the presentation layer must collect
/// before invoking a project delete. Advisory gate only; the store itself
/// never checks it.
pub const ADMIN_DELETE_PASSPHRASE: &str = "redline-admin";

/// Upload ceiling for design images, in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Rendered diameter of a comment marker, in pixels. Markers are anchored
/// by their center, not their top-left corner.
pub const MARKER_DIAMETER: f64 = 32.0;
