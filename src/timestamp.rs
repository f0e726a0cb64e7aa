//! ISO 8601 timestamp parsing shared by the CLI and the manifest store

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parse a timestamp
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`, `2024-01-01T00:00:00+02:00`)
/// or a naive `2024-01-01T00:00:00`, which is taken as UTC.
pub fn parse(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Ok(time.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("invalid timestamp '{value}': {e}"))
}

/// Deserialize a timestamp with [`parse`]
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(serde::de::Error::custom)
}
