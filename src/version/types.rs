//! Common types for upstream tag metadata

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single tag as reported by the upstream registry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamTag {
    /// Tag name (e.g., "15.3.0-debian-11-r4")
    pub name: String,
    /// When the registry last pushed this tag
    pub last_updated: DateTime<Utc>,
}

impl UpstreamTag {
    pub fn new(name: impl Into<String>, last_updated: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            last_updated,
        }
    }
}
