//! # Redline Board
//!
//! Interactive board logic for the feedback workspace:
//!
//! - [`ProjectStore`]: the domain store over the project collection, with
//!   the mutation operations the presentation layer calls and the pure
//!   read derivations it renders from.
//! - [`ImageBounds`]/[`MarkerPoint`]: the coordinate mapper that turns a
//!   pointer position inside a rendered image into resolution-independent
//!   percentage coordinates, and back.
//! - [`upload`]: validation and data-URI encoding of picked image files.
//! - [`Workspace`]: store + persistence + the two selection cursors, with
//!   the visible [`Screen`] derived from whether those cursors resolve.

pub mod store;
pub mod upload;
pub mod viewport;
pub mod workspace;

pub use store::ProjectStore;
pub use upload::{encode_image_payload, read_image_payload, UploadError};
pub use viewport::{ImageBounds, MarkerPoint};
pub use workspace::{Screen, Workspace};
