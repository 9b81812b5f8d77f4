//! Journal entry domain model.
//!
//! This module defines [`Entry`], one dated journal record, and [`EntryId`], its
//! opaque identifier. Entries are value snapshots: every edit or bookmark toggle
//! produces a new `Entry` that replaces the stored one, so a caller holding an older
//! snapshot never observes the change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

const ELLIPSIS: &str = "...";

/// Title shown for entries whose title is blank.
pub const UNTITLED: &str = "My Journal";

/// Lowercases `text` one char at a time.
///
/// Unlike [`str::to_lowercase`] this ignores word context (a final `Σ` becomes `σ`),
/// so the folded text lines up char for char with the folded search needle.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Opaque unique identifier of an entry.
///
/// Assigned once when the entry is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One journal record.
///
/// # Fields
///
/// - `id`: immutable identifier, read through [`Entry::id`]
/// - `title`: free text, may be empty
/// - `body`: free text, may be empty
/// - `touched_at`: last time the entry was created or saved through the editor
/// - `is_bookmarked`: bookmark flag, toggled independently of editing
///
/// # Examples
///
/// ```
/// use daybook::domain::Entry;
///
/// let entry = Entry::new("Trip", "Paris");
/// let toggled = entry.with_bookmark_toggled();
///
/// assert!(!entry.is_bookmarked);
/// assert!(toggled.is_bookmarked);
/// assert_eq!(entry.id(), toggled.id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    id: EntryId,
    pub title: String,
    pub body: String,
    pub touched_at: DateTime<Utc>,
    pub is_bookmarked: bool,
}

impl Entry {
    /// Creates an entry with a fresh id, the given text, the current time, and no bookmark.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            title: title.into(),
            body: body.into(),
            touched_at: Utc::now(),
            is_bookmarked: false,
        }
    }

    /// Creates an empty entry with a fresh id, stamped with the current time.
    #[must_use]
    pub fn blank() -> Self {
        Self::new(String::new(), String::new())
    }

    /// Returns the entry's identifier.
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Returns this snapshot with a different timestamp.
    #[must_use]
    pub fn touched(mut self, at: DateTime<Utc>) -> Self {
        self.touched_at = at;
        self
    }

    /// Returns this snapshot with the given bookmark flag.
    #[must_use]
    pub fn bookmarked(mut self, is_bookmarked: bool) -> Self {
        self.is_bookmarked = is_bookmarked;
        self
    }

    /// Returns a copy with the bookmark flag flipped.
    #[must_use]
    pub fn with_bookmark_toggled(&self) -> Self {
        let mut next = self.clone();
        next.is_bookmarked = !next.is_bookmarked;
        next
    }

    /// Returns a copy carrying new title and body text.
    ///
    /// The id, timestamp and bookmark flag are kept; the store refreshes the
    /// timestamp when the snapshot is saved.
    #[must_use]
    pub fn with_text(&self, title: impl Into<String>, body: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.title = title.into();
        next.body = body.into();
        next
    }

    /// Returns `true` if both title and body are empty after trimming whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.body.trim().is_empty()
    }

    /// Case-insensitive substring match against title or body.
    ///
    /// `needle_lower` must already be folded with [`fold_case`]. An empty needle
    /// matches everything.
    #[must_use]
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        fold_case(&self.title).contains(needle_lower)
            || fold_case(&self.body).contains(needle_lower)
    }

    /// Title to show in lists, falling back to [`UNTITLED`].
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Formats the timestamp as `dd/MM/yyyy`.
    #[must_use]
    pub fn short_date(&self) -> String {
        self.touched_at.format("%d/%m/%Y").to_string()
    }

    /// Collapses the body onto one line and truncates it to `max_chars` characters.
    ///
    /// Truncated previews end with `...`.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let collapsed = self.body.split_whitespace().collect::<Vec<_>>().join(" ");
        if collapsed.chars().count() <= max_chars {
            return collapsed;
        }
        if max_chars < ELLIPSIS.len() {
            return ".".repeat(max_chars);
        }
        let mut out: String = collapsed.chars().take(max_chars - ELLIPSIS.len()).collect();
        out.push_str(ELLIPSIS);
        out
    }

    /// Returns a human-readable string describing how long ago the entry was touched.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn time_ago(&self) -> String {
        self.time_ago_at(Utc::now())
    }

    /// Same as [`Entry::time_ago`] against an explicit clock reading.
    #[must_use]
    pub fn time_ago_at(&self, now: DateTime<Utc>) -> String {
        let diff = (now - self.touched_at).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}
