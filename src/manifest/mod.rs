//! Manifest layer: the persisted record of tracked versions
//!
//! # Modules
//!
//! - [`types`]: Manifest and record data model
//! - [`builder`]: Candidate manifest construction from upstream tags
//! - [`merge`]: Reconciliation of the previous manifest with the candidate
//! - [`store`]: JSON load/save
//! - [`summary`]: Markdown run summary
//! - [`error`]: Error types for building and persistence

pub mod builder;
pub mod error;
pub mod merge;
pub mod store;
pub mod summary;
pub mod types;

pub use builder::{BuildOptions, build_candidate};
pub use merge::merge;
pub use types::{EngineRecord, ExtensionRecord, Manifest};
