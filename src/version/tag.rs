//! Upstream tag parsing
//!
//! Bitnami tags look like `<version>-debian-<debian_version>-<revision>`,
//! e.g. `15.3.0-debian-11-r4`.

use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::TagError;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<version>[^-]+)-debian-(?P<debian_version>[^-]+)-.*")
        .expect("tag pattern is a valid regex")
});

/// Components extracted from an upstream tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    pub version: String,
    pub debian_version: String,
}

impl ParsedTag {
    /// Parse an upstream tag into its version and debian version
    ///
    /// Only the shape of the tag is checked; the version part is not
    /// required to be valid semver.
    pub fn parse(tag: &str) -> Result<Self, TagError> {
        let captures = TAG_PATTERN
            .captures(tag)
            .ok_or_else(|| TagError::Malformed(tag.to_string()))?;

        Ok(Self {
            version: captures["version"].to_string(),
            debian_version: captures["debian_version"].to_string(),
        })
    }
}
