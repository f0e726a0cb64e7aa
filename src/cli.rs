//! Command-line interface

use std::path::PathBuf;

use chrono::{DateTime, SubsecRound, Utc};
use clap::Parser;

use crate::config::UpdaterConfig;
use crate::manifest::BuildOptions;
use crate::timestamp;
use crate::updater::UpdateRequest;
use crate::version::selector::RequestedMajors;

#[derive(Debug, Parser)]
#[command(name = "wal2json-updater")]
#[command(
    version,
    about = "Track upstream wal2json and PostgreSQL versions in an image tag manifest"
)]
pub struct Cli {
    /// Path to the manifest file (created if missing)
    #[arg(long)]
    pub manifest: PathBuf,

    /// Image the alias tags are published under [default: betaboon/bitnami-postgresql-wal2json]
    #[arg(long)]
    pub image_name: Option<String>,

    /// Timestamp of this run (RFC 3339, or naive ISO 8601 taken as UTC) [default: now]
    #[arg(long, value_parser = timestamp::parse)]
    pub update_time: Option<DateTime<Utc>>,

    /// Write a Markdown summary of the run to this path
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// PostgreSQL major versions to track (e.g. 13 14 15)
    #[arg(required = true, num_args = 1..)]
    pub major_versions: Vec<String>,
}

impl Cli {
    /// Combine command-line flags with the configuration file
    ///
    /// Flags take precedence over file values.
    pub fn into_request(self, config: &UpdaterConfig) -> UpdateRequest {
        let update_time = self
            .update_time
            .unwrap_or_else(|| Utc::now().trunc_subsecs(0));

        UpdateRequest {
            manifest_path: self.manifest,
            summary_path: self.summary,
            repository: config.registry.repository.clone(),
            majors: RequestedMajors::new(self.major_versions),
            options: BuildOptions {
                update_time,
                image_name: self
                    .image_name
                    .unwrap_or_else(|| config.image_name.clone()),
                extension_version: config.wal2json.version.clone(),
                extension_tag: config.wal2json.upstream_tag.clone(),
            },
        }
    }
}
