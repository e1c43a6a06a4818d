//! # Redline
//!
//! State core for a design-feedback workspace: users create projects,
//! upload design images as boards, and annotate those boards with
//! positioned and general comments.
//!
//! ## Architecture
//!
//! Redline is organized as a workspace with multiple crates:
//!
//! 1. **redline-core** - Data model (Project -> Design -> Comment),
//!    entity id generation, shared constants
//! 2. **redline-storage** - Key-value persistence of the project
//!    collection as a single JSON blob
//! 3. **redline-board** - Domain store, marker coordinate mapping,
//!    upload intake, workspace state and screen derivation
//! 4. **redline** - Facade crate that re-exports the public surface
//!
//! The presentation layer is an external collaborator: it collects and
//! validates form input, reads picked files into image payloads, renders
//! markers at each comment's percentage coordinates, and enforces the
//! advisory password gates before calling the mutation operations exposed
//! by [`Workspace`].

pub use redline_core::{constants, id, Comment, Design, Project};

pub use redline_storage::{
    FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult, WorkspacePersistence,
};

pub use redline_board::{
    encode_image_payload, read_image_payload, ImageBounds, MarkerPoint, ProjectStore, Screen,
    UploadError, Workspace,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
/// - INFO default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
