//! Candidate manifest construction from upstream tags

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::manifest::error::BuildError;
use crate::manifest::types::{EngineRecord, ExtensionRecord, Manifest};
use crate::version::selector::{RequestedMajors, select_latest_tag};
use crate::version::tag::ParsedTag;
use crate::version::types::UpstreamTag;

/// Inputs shared by every record built in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub update_time: DateTime<Utc>,
    pub image_name: String,
    pub extension_version: String,
    pub extension_tag: String,
}

impl ExtensionRecord {
    pub fn new(update_time: DateTime<Utc>, version: &str, upstream_tag: &str) -> Self {
        Self {
            last_updated: update_time,
            version: version.to_string(),
            upstream_tag: upstream_tag.to_string(),
        }
    }
}

impl EngineRecord {
    /// Build a record and its publish aliases from a selected upstream tag
    ///
    /// Alias order: exact upstream tag, `<major>-debian-<debian>`,
    /// `<version>`, `<major>`, then `latest` when requested.
    pub fn from_upstream(
        update_time: DateTime<Utc>,
        image_name: &str,
        major_version: &str,
        upstream_tag: &str,
        latest: bool,
    ) -> Result<Self, BuildError> {
        let ParsedTag {
            version,
            debian_version,
        } = ParsedTag::parse(upstream_tag)?;

        let mut tags = vec![
            format!("{image_name}:{upstream_tag}"),
            format!("{image_name}:{major_version}-debian-{debian_version}"),
            format!("{image_name}:{version}"),
            format!("{image_name}:{major_version}"),
        ];
        if latest {
            tags.push(format!("{image_name}:latest"));
        }

        Ok(Self {
            last_updated: update_time,
            version,
            major_version: major_version.to_string(),
            upstream_tag: upstream_tag.to_string(),
            tags,
        })
    }
}

/// Build the candidate manifest for this run
///
/// Produces one engine record per requested major, in ascending order. The
/// last requested major carries the `latest` alias.
pub fn build_candidate(
    tags: &[UpstreamTag],
    majors: &RequestedMajors,
    options: &BuildOptions,
) -> Result<Manifest, BuildError> {
    let extension = ExtensionRecord::new(
        options.update_time,
        &options.extension_version,
        &options.extension_tag,
    );

    let engine = majors
        .iter()
        .map(|major| -> Result<EngineRecord, BuildError> {
            let selected = select_latest_tag(tags, major)?;
            let record = EngineRecord::from_upstream(
                options.update_time,
                &options.image_name,
                major,
                &selected.name,
                majors.is_latest(major),
            )?;
            debug!("Found postgresql tag: {}", record.upstream_tag);
            Ok(record)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Manifest { extension, engine })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::{SelectionError, TagError};
    use rstest::rstest;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn options() -> BuildOptions {
        BuildOptions {
            update_time: ts("2024-01-01T00:00:00Z"),
            image_name: "acme/img".to_string(),
            extension_version: "2.5".to_string(),
            extension_tag: "wal2json_2_5".to_string(),
        }
    }

    fn upstream_tags() -> Vec<UpstreamTag> {
        vec![
            UpstreamTag::new("13.12.0-debian-11-r1", ts("2023-10-01T00:00:00Z")),
            UpstreamTag::new("14.9.0-debian-11-r2", ts("2023-10-02T00:00:00Z")),
            UpstreamTag::new("15.3-debian-12-r4", ts("2023-10-03T00:00:00Z")),
            UpstreamTag::new("15.2-debian-12-r9", ts("2023-09-03T00:00:00Z")),
        ]
    }

    #[test]
    fn from_upstream_builds_aliases_in_fixed_order() {
        let record = EngineRecord::from_upstream(
            ts("2024-01-01T00:00:00Z"),
            "acme/img",
            "15",
            "15.3-debian-12-r4",
            true,
        )
        .unwrap();

        assert_eq!(record.version, "15.3");
        assert_eq!(record.major_version, "15");
        assert_eq!(record.upstream_tag, "15.3-debian-12-r4");
        assert_eq!(
            record.tags,
            vec![
                "acme/img:15.3-debian-12-r4",
                "acme/img:15-debian-12",
                "acme/img:15.3",
                "acme/img:15",
                "acme/img:latest",
            ]
        );
    }

    #[test]
    fn from_upstream_omits_latest_alias_when_not_latest() {
        let record = EngineRecord::from_upstream(
            ts("2024-01-01T00:00:00Z"),
            "acme/img",
            "14",
            "14.9.0-debian-11-r2",
            false,
        )
        .unwrap();

        assert_eq!(
            record.tags,
            vec![
                "acme/img:14.9.0-debian-11-r2",
                "acme/img:14-debian-11",
                "acme/img:14.9.0",
                "acme/img:14",
            ]
        );
    }

    #[test]
    fn from_upstream_rejects_malformed_tag() {
        let result = EngineRecord::from_upstream(
            ts("2024-01-01T00:00:00Z"),
            "acme/img",
            "15",
            "15.3",
            false,
        );

        assert_eq!(
            result,
            Err(BuildError::Tag(TagError::Malformed("15.3".to_string())))
        );
    }

    #[rstest]
    #[case(vec!["13", "14", "15"], "15")]
    #[case(vec!["15"], "15")]
    #[case(vec!["15", "13"], "15")]
    #[case(vec!["13", "14"], "14")]
    fn build_candidate_puts_latest_alias_on_last_requested_major(
        #[case] requested: Vec<&str>,
        #[case] expected_latest: &str,
    ) {
        let majors = RequestedMajors::new(requested);

        let manifest = build_candidate(&upstream_tags(), &majors, &options()).unwrap();

        for record in &manifest.engine {
            let has_latest = record.tags.contains(&"acme/img:latest".to_string());
            assert_eq!(has_latest, record.major_version == expected_latest);
        }
    }

    #[test]
    fn build_candidate_orders_engine_records_by_major() {
        let majors = RequestedMajors::new(["15", "13", "14"]);

        let manifest = build_candidate(&upstream_tags(), &majors, &options()).unwrap();

        assert_eq!(
            manifest
                .engine
                .iter()
                .map(|r| r.upstream_tag.as_str())
                .collect::<Vec<_>>(),
            vec![
                "13.12.0-debian-11-r1",
                "14.9.0-debian-11-r2",
                "15.3-debian-12-r4"
            ]
        );
        assert_eq!(
            manifest.extension,
            ExtensionRecord::new(ts("2024-01-01T00:00:00Z"), "2.5", "wal2json_2_5")
        );
    }

    #[test]
    fn build_candidate_fails_when_major_has_no_tags() {
        let majors = RequestedMajors::new(["12", "15"]);

        let result = build_candidate(&upstream_tags(), &majors, &options());

        assert_eq!(
            result,
            Err(BuildError::Selection(SelectionError::NotFound(
                "12".to_string()
            )))
        );
    }
}
