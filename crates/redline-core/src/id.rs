//! Unique id generation for workspace entities.
//!
//! Ids are opaque, kind-prefixed UUID v4 strings. Random 128-bit ids are
//! collision-free without per-collection coordination; ids derived from
//! wall-clock time are not (two entities created within the same
//! millisecond would collide).

use uuid::Uuid;

/// Generates a fresh project id, unique across the collection.
pub fn new_project_id() -> String {
    format!("proj-{}", Uuid::new_v4())
}

/// Generates a fresh design id.
pub fn new_design_id() -> String {
    format!("design-{}", Uuid::new_v4())
}

/// Generates a fresh comment id.
pub fn new_comment_id() -> String {
    format!("comment-{}", Uuid::new_v4())
}
