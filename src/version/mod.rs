//! Upstream version layer
//!
//! Fetches tag metadata from the upstream registry and picks the tag tracked
//! for each requested PostgreSQL major version.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│  Selector   │────▶│  TagParser  │
//! │  (fetch)    │     │ (per major) │     │ (components)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`registry`]: Registry trait for fetching tags from remote sources
//! - [`registries`]: Concrete registry implementations (Docker Hub)
//! - [`selector`]: Requested majors and per-major tag selection
//! - [`tag`]: Upstream tag parsing
//! - [`error`]: Error types for registry, parsing and selection
//! - [`types`]: Common types like `UpstreamTag`

pub mod error;
pub mod registries;
pub mod registry;
pub mod selector;
pub mod tag;
pub mod types;
