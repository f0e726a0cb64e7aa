//! Manifest data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamp;

/// Tracked state of the wal2json extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtensionRecord {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub last_updated: DateTime<Utc>,
    pub version: String,
    pub upstream_tag: String,
}

/// Tracked state of one PostgreSQL major version line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineRecord {
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub last_updated: DateTime<Utc>,
    pub version: String,
    pub major_version: String,
    pub upstream_tag: String,
    /// Publish aliases, ordered as built by [`EngineRecord::from_upstream`]
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Persisted record of the tracked upstream versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(rename = "wal2json", alias = "extension")]
    pub extension: ExtensionRecord,
    #[serde(rename = "postgresql", alias = "engine", default)]
    pub engine: Vec<EngineRecord>,
}

impl Manifest {
    /// Look up the engine entry of a major version line
    pub fn engine_record(&self, major_version: &str) -> Option<&EngineRecord> {
        self.engine
            .iter()
            .find(|record| record.major_version == major_version)
    }
}
