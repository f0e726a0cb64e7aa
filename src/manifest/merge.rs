//! Reconciliation of the persisted manifest with a freshly built candidate
//!
//! An entry only advances when its upstream tag changed since the previous
//! run, so `last_updated` records when upstream actually moved rather than
//! when the updater last ran.
//!
//! Engine entries are reconciled per requested major:
//!
//! | previous | candidate | tags equal | result    |
//! |----------|-----------|------------|-----------|
//! | -        | yes       | -          | candidate |
//! | yes      | yes       | no         | candidate |
//! | yes      | yes       | yes        | previous  |
//! | yes      | -         | -          | previous  |
//! | -        | -         | -          | dropped   |
//!
//! Majors that are no longer requested are dropped as well.

use indexmap::IndexMap;
use tracing::debug;

use crate::manifest::types::{EngineRecord, Manifest};
use crate::version::selector::RequestedMajors;

/// Merge a candidate manifest into the previously persisted one
///
/// Returns the candidate as-is when there is no previous manifest.
pub fn merge(
    previous: Option<Manifest>,
    candidate: Manifest,
    requested: &RequestedMajors,
) -> Manifest {
    let Some(previous) = previous else {
        debug!("No previous manifest, using candidate");
        return candidate;
    };

    let extension = if previous.extension.upstream_tag != candidate.extension.upstream_tag {
        debug!(
            "wal2json changed: {} -> {}",
            previous.extension.upstream_tag, candidate.extension.upstream_tag
        );
        candidate.extension
    } else {
        previous.extension
    };

    let mut previous_engine = index_by_major(previous.engine);
    let mut candidate_engine = index_by_major(candidate.engine);

    let engine = requested
        .iter()
        .filter_map(|major| {
            reconcile_engine(
                major,
                previous_engine.shift_remove(major),
                candidate_engine.shift_remove(major),
            )
        })
        .collect();

    Manifest { extension, engine }
}

fn index_by_major(records: Vec<EngineRecord>) -> IndexMap<String, EngineRecord> {
    records
        .into_iter()
        .map(|record| (record.major_version.clone(), record))
        .collect()
}

fn reconcile_engine(
    major: &str,
    previous: Option<EngineRecord>,
    candidate: Option<EngineRecord>,
) -> Option<EngineRecord> {
    match (previous, candidate) {
        (None, Some(candidate)) => {
            debug!("postgresql {} is new: {}", major, candidate.upstream_tag);
            Some(candidate)
        }
        (Some(previous), Some(candidate)) if previous.upstream_tag != candidate.upstream_tag => {
            debug!(
                "postgresql {} changed: {} -> {}",
                major, previous.upstream_tag, candidate.upstream_tag
            );
            Some(candidate)
        }
        (Some(previous), _) => {
            debug!("postgresql {} unchanged: {}", major, previous.upstream_tag);
            Some(previous)
        }
        (None, None) => {
            debug!("postgresql {} has no previous or candidate entry, dropping", major);
            None
        }
    }
}
