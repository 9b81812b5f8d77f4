//! Sample entries loaded on launch.
//!
//! The journal is memory-resident, so every launch starts from the same sample set.
//! Samples live in `seeds/samples.json`, embedded at compile time. Each record gives
//! an age in hours; timestamps are computed relative to the launch time so the
//! samples always read as recent.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": [
//!     { "title": "My Birthday", "body": "...", "hours_ago": 2, "bookmarked": true }
//!   ]
//! }
//! ```

use crate::domain::error::{DaybookError, Result};
use crate::domain::Entry;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

const SAMPLES_JSON: &str = include_str!("../../seeds/samples.json");

/// Seed file container.
#[derive(Debug, Deserialize)]
struct SeedFile {
    /// Format version for future migrations.
    version: u32,
    #[serde(default)]
    entries: Vec<SeedRecord>,
}

/// One sample entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedRecord {
    pub title: String,
    pub body: String,
    /// Age of the entry relative to launch.
    pub hours_ago: i64,
    #[serde(default)]
    pub bookmarked: bool,
}

impl SeedRecord {
    /// Builds an entry with a fresh id, aged relative to `now`.
    #[must_use]
    pub fn into_entry(self, now: DateTime<Utc>) -> Entry {
        Entry::new(self.title, self.body)
            .touched(now - Duration::hours(self.hours_ago.max(0)))
            .bookmarked(self.bookmarked)
    }
}

/// Parses seed JSON into entries stamped relative to `now`.
///
/// # Errors
///
/// Returns [`DaybookError::Seed`] if the JSON does not match the seed format.
pub fn parse_seed(json: &str, now: DateTime<Utc>) -> Result<Vec<Entry>> {
    let file: SeedFile = serde_json::from_str(json)
        .map_err(|e| DaybookError::Seed(format!("failed to parse JSON: {e}")))?;

    tracing::debug!(
        version = file.version,
        entries = file.entries.len(),
        "loaded seed data"
    );

    Ok(file
        .entries
        .into_iter()
        .map(|record| record.into_entry(now))
        .collect())
}

/// Returns the built-in sample entries.
///
/// # Errors
///
/// Returns [`DaybookError::Seed`] if the embedded file is malformed.
pub fn sample_entries(now: DateTime<Utc>) -> Result<Vec<Entry>> {
    parse_seed(SAMPLES_JSON, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn embedded_samples_parse() {
        let now = Utc.with_ymd_and_hms(2025, 10, 22, 12, 0, 0).unwrap();
        let entries = sample_entries(now).unwrap();

        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.touched_at <= now));
        assert!(entries.iter().all(|e| !e.is_blank()));
    }

    #[test]
    fn ages_are_relative_to_now() {
        let now = Utc.with_ymd_and_hms(2025, 10, 22, 12, 0, 0).unwrap();
        let json = r#"{"version":1,"entries":[{"title":"t","body":"b","hours_ago":5}]}"#;

        let entries = parse_seed(json, now).unwrap();
        assert_eq!(entries[0].touched_at, now - Duration::hours(5));
        assert!(!entries[0].is_bookmarked);
    }

    #[test]
    fn malformed_seed_is_reported() {
        let err = parse_seed("{not json", Utc::now()).unwrap_err();
        assert!(matches!(err, DaybookError::Seed(_)));
    }
}
