//! Markdown run summary

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::manifest::error::StoreError;
use crate::manifest::types::Manifest;

fn updated_marker(updated: bool) -> &'static str {
    if updated {
        ":heavy_check_mark:"
    } else {
        ":x:"
    }
}

fn block(title: &str, updated: bool, tag: &str, version: &str) -> String {
    format!(
        "\n# {title}\n\nUpdated: {}\nTag: {tag}\nVersion: {version}\n",
        updated_marker(updated)
    )
}

/// Render the summary of a reconciled manifest
///
/// An entry counts as updated when its `last_updated` equals this run's time.
pub fn render(manifest: &Manifest, update_time: DateTime<Utc>) -> String {
    let extension = &manifest.extension;
    let mut out = block(
        "wal2json",
        extension.last_updated == update_time,
        &extension.upstream_tag,
        &extension.version,
    );

    for record in &manifest.engine {
        out.push_str(&block(
            &format!("postgresql {}", record.major_version),
            record.last_updated == update_time,
            &record.upstream_tag,
            &record.version,
        ));
    }

    out
}

pub fn write(
    path: &Path,
    manifest: &Manifest,
    update_time: DateTime<Utc>,
) -> Result<(), StoreError> {
    std::fs::write(path, render(manifest, update_time)).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!("Wrote summary to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::types::{EngineRecord, ExtensionRecord};

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn render_marks_entries_updated_in_this_run() {
        let run = ts("2024-01-01T00:00:00Z");
        let manifest = Manifest {
            extension: ExtensionRecord::new(ts("2023-01-01T00:00:00Z"), "2.5", "wal2json_2_5"),
            engine: vec![
                EngineRecord::from_upstream(run, "acme/img", "14", "14.9.0-debian-11-r2", false)
                    .unwrap(),
                EngineRecord::from_upstream(
                    ts("2023-06-01T00:00:00Z"),
                    "acme/img",
                    "15",
                    "15.3.0-debian-11-r4",
                    true,
                )
                .unwrap(),
            ],
        };

        let summary = render(&manifest, run);

        assert_eq!(
            summary,
            "
# wal2json

Updated: :x:
Tag: wal2json_2_5
Version: 2.5

# postgresql 14

Updated: :heavy_check_mark:
Tag: 14.9.0-debian-11-r2
Version: 14.9.0

# postgresql 15

Updated: :x:
Tag: 15.3.0-debian-11-r4
Version: 15.3.0
"
        );
    }

    #[test]
    fn write_creates_summary_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("summary.md");
        let run = ts("2024-01-01T00:00:00Z");
        let manifest = Manifest {
            extension: ExtensionRecord::new(run, "2.5", "wal2json_2_5"),
            engine: vec![],
        };

        write(&path, &manifest, run).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Updated: :heavy_check_mark:"));
    }
}
