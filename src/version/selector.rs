//! Selection of the tracked upstream tag per major version line

use std::collections::BTreeSet;

use crate::version::error::SelectionError;
use crate::version::types::UpstreamTag;

/// Major versions requested for a run, sorted ascending and deduplicated
///
/// Ordering is plain string ordering, so `"9"` sorts after `"15"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestedMajors(Vec<String>);

impl RequestedMajors {
    pub fn new<I, S>(majors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sorted: BTreeSet<String> = majors.into_iter().map(Into::into).collect();
        Self(sorted.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The major that receives the `latest` alias
    pub fn latest(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn is_latest(&self, major: &str) -> bool {
        self.latest() == Some(major)
    }
}

/// Select the most recently updated tag of a major version line
///
/// Tags are matched by the `"<major>."` prefix and ranked by the registry's
/// `last_updated` timestamp, not by version number. On equal timestamps the
/// tag listed last wins.
pub fn select_latest_tag<'a>(
    tags: &'a [UpstreamTag],
    major: &str,
) -> Result<&'a UpstreamTag, SelectionError> {
    let prefix = format!("{major}.");

    tags.iter()
        .filter(|tag| tag.name.starts_with(&prefix))
        .max_by_key(|tag| tag.last_updated)
        .ok_or_else(|| SelectionError::NotFound(major.to_string()))
}
