//! Registry test utilities

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use wal2json_updater::manifest::BuildOptions;
use wal2json_updater::updater::UpdateRequest;
use wal2json_updater::version::error::RegistryError;
use wal2json_updater::version::registry::Registry;
use wal2json_updater::version::selector::RequestedMajors;
use wal2json_updater::version::types::UpstreamTag;

pub const REPOSITORY: &str = "bitnami/postgresql";
pub const IMAGE: &str = "acme/img";

/// Mock registry for testing
#[derive(Default)]
pub struct MockRegistry {
    tags: HashMap<String, Vec<UpstreamTag>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register tags as `(name, last_updated)` pairs, in listing order
    pub fn with_tags(mut self, repository: &str, tags: &[(&str, &str)]) -> Self {
        self.tags.insert(
            repository.to_string(),
            tags.iter()
                .map(|(name, last_updated)| UpstreamTag::new(*name, ts(last_updated)))
                .collect(),
        );
        self
    }
}

#[async_trait]
impl Registry for MockRegistry {
    async fn fetch_tags(&self, repository: &str) -> Result<Vec<UpstreamTag>, RegistryError> {
        match self.tags.get(repository) {
            Some(tags) => Ok(tags.clone()),
            None => Err(RegistryError::NotFound(repository.to_string())),
        }
    }
}

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

/// Create an update request writing to `dir`
pub fn create_request(dir: &Path, update_time: &str, majors: &[&str]) -> UpdateRequest {
    UpdateRequest {
        manifest_path: dir.join("manifest.json"),
        summary_path: Some(dir.join("summary.md")),
        repository: REPOSITORY.to_string(),
        majors: RequestedMajors::new(majors.iter().copied()),
        options: BuildOptions {
            update_time: ts(update_time),
            image_name: IMAGE.to_string(),
            extension_version: "2.5".to_string(),
            extension_tag: "wal2json_2_5".to_string(),
        },
    }
}
