//! # Redline Core
//!
//! Core data model and shared utilities for the Redline feedback workspace.
//! Provides the Project -> Design -> Comment tree, entity id generation,
//! and the constants shared between the storage and board crates.

pub mod constants;
pub mod data;
pub mod id;

pub use data::{Comment, Design, Project};
