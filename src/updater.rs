//! One reconciliation run: fetch, build, merge, persist

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

use crate::manifest::error::{BuildError, StoreError};
use crate::manifest::{BuildOptions, Manifest, build_candidate, merge, store, summary};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::selector::RequestedMajors;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Failed to fetch upstream tags: {0}")]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Everything a run needs besides the registry
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub manifest_path: PathBuf,
    pub summary_path: Option<PathBuf>,
    pub repository: String,
    pub majors: RequestedMajors,
    pub options: BuildOptions,
}

/// Outcome of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub manifest: Manifest,
    /// Items whose entry advanced this run (`wal2json`, `postgresql <major>`)
    pub updated: Vec<String>,
}

impl UpdateReport {
    fn new(manifest: Manifest, update_time: DateTime<Utc>) -> Self {
        let mut updated = Vec::new();
        if manifest.extension.last_updated == update_time {
            updated.push("wal2json".to_string());
        }
        updated.extend(
            manifest
                .engine
                .iter()
                .filter(|record| record.last_updated == update_time)
                .map(|record| format!("postgresql {}", record.major_version)),
        );

        Self { manifest, updated }
    }
}

pub struct Updater<R: Registry> {
    registry: R,
}

impl<R: Registry> Updater<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// Run one update
    ///
    /// Every failure happens before the manifest is written, leaving the
    /// file on disk untouched.
    pub async fn run(&self, request: &UpdateRequest) -> Result<UpdateReport, UpdateError> {
        info!(
            "Updating manifest for majors: {}",
            request.majors.iter().collect::<Vec<_>>().join(" ")
        );

        let tags = self.registry.fetch_tags(&request.repository).await?;
        let candidate = build_candidate(&tags, &request.majors, &request.options)?;

        let previous = store::load(&request.manifest_path)?;
        let manifest = merge(previous, candidate, &request.majors);

        store::save(&request.manifest_path, &manifest)?;

        if let Some(summary_path) = &request.summary_path {
            summary::write(summary_path, &manifest, request.options.update_time)?;
        }

        let report = UpdateReport::new(manifest, request.options.update_time);
        if report.updated.is_empty() {
            info!("No upstream changes");
        } else {
            info!("Updated: {}", report.updated.join(", "));
        }

        Ok(report)
    }
}
