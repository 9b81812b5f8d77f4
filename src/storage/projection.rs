//! Derivation of the visible entry list.
//!
//! The visible list is a pure function of (entries, sort mode, search text). It is
//! recomputed on every read and never cached as a second copy of the store.
//!
//! # Pipeline
//!
//! 1. **Filter**: trim and lowercase the search text; keep entries whose title or body
//!    contains it. An empty search keeps everything.
//! 2. **Sort** (stable, so equal keys keep insertion order):
//!    - `ByBookmark`: bookmarked first, newest first within each group
//!    - `ByDate`: newest first
//! 3. **Emit** owned snapshots, detached from the store.

use crate::domain::entry::fold_case;
use crate::domain::{Entry, SortMode};

/// Computes the visible list for the given inputs.
///
/// # Examples
///
/// ```
/// use daybook::domain::{Entry, SortMode};
/// use daybook::storage::project;
///
/// let entries = vec![Entry::new("Trip", "Paris"), Entry::new("Work", "Deadline")];
///
/// let visible = project(&entries, SortMode::ByDate, "par");
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].title, "Trip");
/// assert_eq!(project(&entries, SortMode::ByDate, "").len(), 2);
/// ```
#[must_use]
pub fn project(entries: &[Entry], sort: SortMode, search: &str) -> Vec<Entry> {
    let needle = normalize_query(search);

    let _span = tracing::debug_span!("project_entries",
        total_entries = entries.len(),
        query_len = needle.len(),
        sort_mode = ?sort
    ).entered();

    let mut visible: Vec<Entry> = entries
        .iter()
        .filter(|entry| entry.contains_lowercase(&needle))
        .cloned()
        .collect();

    sort_entries(&mut visible, sort);

    tracing::trace!(visible_count = visible.len(), "projection computed");
    visible
}

/// Trims and case-folds raw search input.
#[must_use]
pub fn normalize_query(search: &str) -> String {
    fold_case(search.trim())
}

/// Sorts entries in place by the given mode.
///
/// Uses a stable sort, so entries with equal keys keep their relative order.
pub fn sort_entries(entries: &mut [Entry], sort: SortMode) {
    match sort {
        SortMode::ByDate => entries.sort_by(|a, b| b.touched_at.cmp(&a.touched_at)),
        SortMode::ByBookmark => entries.sort_by(|a, b| {
            b.is_bookmarked
                .cmp(&a.is_bookmarked)
                .then_with(|| b.touched_at.cmp(&a.touched_at))
        }),
    }
}

/// Finds the first case-insensitive occurrence of `needle_lower` in `text`.
///
/// Returns a `(start, end)` range of character indices into `text` (exclusive end),
/// or `None` if the needle is empty or absent.
#[must_use]
pub fn match_range(text: &str, needle_lower: &str) -> Option<(usize, usize)> {
    if needle_lower.is_empty() {
        return None;
    }

    // Lowercasing can change byte lengths, so remember which source char produced
    // every byte of the lowered text.
    let mut lowered = String::with_capacity(text.len());
    let mut owners = Vec::with_capacity(text.len());
    for (char_index, c) in text.chars().enumerate() {
        for lower in c.to_lowercase() {
            lowered.push(lower);
            owners.resize(lowered.len(), char_index);
        }
    }

    let byte_start = lowered.find(needle_lower)?;
    let byte_end = byte_start + needle_lower.len();

    Some((owners[byte_start], owners[byte_end - 1] + 1))
}
