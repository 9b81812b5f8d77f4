//! Canonical in-memory entry collection.
//!
//! [`EntryStore`] exclusively owns the list of entries (kept in insertion order),
//! the set of unsaved draft ids, and the single pending-delete slot. It is the only
//! source of truth: the visible list is always derived from it by
//! [`project`](super::projection::project) and never stored back.
//!
//! Every mutation is applied completely before subscribers are notified.

use super::notify::{StoreChange, Subscribers, SubscriptionId};
use crate::domain::error::{DaybookError, Result};
use crate::domain::{Entry, EntryId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Result of [`EntryStore::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No entry had this id; the snapshot was appended.
    Inserted,
    /// An entry with this id was replaced.
    Updated,
}

/// Owner of all journal entries.
///
/// # Examples
///
/// ```
/// use daybook::storage::{EntryStore, SaveOutcome};
///
/// let mut store = EntryStore::new();
/// let draft = store.create_draft();
/// assert!(store.is_draft(draft.id()));
///
/// let outcome = store.save(draft.with_text("Trip", "Paris"));
/// assert_eq!(outcome, SaveOutcome::Updated);
/// assert!(!store.is_draft(draft.id()));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct EntryStore {
    pub(super) entries: Vec<Entry>,
    pub(super) drafts: HashSet<EntryId>,
    pub(super) pending_delete: Option<EntryId>,
    subscribers: Subscribers,
}

impl EntryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given entries, as-is.
    ///
    /// Timestamps are kept. A later entry with an id already seen replaces the earlier
    /// one, so ids stay unique. None of the entries are drafts.
    #[must_use]
    pub fn with_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            match store.position(entry.id()) {
                Some(index) => store.entries[index] = entry,
                None => store.entries.push(entry),
            }
        }
        tracing::debug!(entry_count = store.entries.len(), "entry store created");
        store
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Returns `true` if an entry with this id exists.
    #[must_use]
    pub fn contains(&self, id: EntryId) -> bool {
        self.position(id).is_some()
    }

    /// Returns `true` if the entry was created by [`EntryStore::create_draft`] and has
    /// not been saved since.
    #[must_use]
    pub fn is_draft(&self, id: EntryId) -> bool {
        self.drafts.contains(&id)
    }

    /// Inserts a new blank entry and returns it.
    ///
    /// The draft is visible in the store immediately, before anything is saved.
    pub fn create_draft(&mut self) -> Entry {
        let mut draft = Entry::blank();
        while self.contains(draft.id()) {
            draft = Entry::blank();
        }

        let _span = tracing::debug_span!("create_draft", entry_id = %draft.id()).entered();

        self.entries.push(draft.clone());
        self.drafts.insert(draft.id());
        self.emit(StoreChange::Inserted(draft.id()));

        tracing::debug!(entry_count = self.entries.len(), "draft created");
        draft
    }

    /// Upserts a snapshot keyed by id, stamping it with the current time.
    pub fn save(&mut self, entry: Entry) -> SaveOutcome {
        self.save_at(entry, Utc::now())
    }

    /// Upserts a snapshot keyed by id, stamping it with `at`.
    ///
    /// Saving clears the entry's draft status.
    pub fn save_at(&mut self, entry: Entry, at: DateTime<Utc>) -> SaveOutcome {
        let id = entry.id();
        let _span = tracing::debug_span!("save_entry", entry_id = %id).entered();

        let entry = entry.touched(at);
        self.drafts.remove(&id);

        let outcome = if let Some(index) = self.position(id) {
            self.entries[index] = entry;
            self.emit(StoreChange::Updated(id));
            SaveOutcome::Updated
        } else {
            self.entries.push(entry);
            self.emit(StoreChange::Inserted(id));
            SaveOutcome::Inserted
        };

        tracing::debug!(outcome = ?outcome, "entry saved");
        outcome
    }

    /// Flips the bookmark flag of an entry and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`DaybookError::NotFound`] if no entry has this id.
    pub fn toggle_bookmark(&mut self, id: EntryId) -> Result<bool> {
        let _span = tracing::debug_span!("toggle_bookmark", entry_id = %id).entered();

        let index = self.position(id).ok_or(DaybookError::NotFound(id))?;
        let next = self.entries[index].with_bookmark_toggled();
        let is_bookmarked = next.is_bookmarked;
        self.entries[index] = next;
        self.emit(StoreChange::Updated(id));

        tracing::debug!(is_bookmarked, "bookmark toggled");
        Ok(is_bookmarked)
    }

    /// Registers a change callback.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange) + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Removes a change callback. Returns `false` if the handle was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(super) fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    pub(super) fn emit(&mut self, change: StoreChange) {
        self.subscribers.notify(&change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn draft_is_inserted_blank_and_unbookmarked() {
        let mut store = EntryStore::new();
        let draft = store.create_draft();

        assert!(draft.is_blank());
        assert!(!draft.is_bookmarked);
        assert_eq!(store.get(draft.id()), Some(&draft));
        assert!(store.is_draft(draft.id()));
    }

    #[test]
    fn ids_stay_unique_across_drafts_and_saves() {
        let mut store = EntryStore::new();
        let first = store.create_draft();
        store.create_draft();
        store.save(Entry::new("Loose", "entry"));
        store.save(first.with_text("again", "same id"));

        let mut ids: Vec<_> = store.entries().iter().map(Entry::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn save_upserts_and_refreshes_timestamp() {
        let mut store = EntryStore::new();
        let earlier = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        let entry = Entry::new("Trip", "Paris");

        assert_eq!(store.save_at(entry.clone(), earlier), SaveOutcome::Inserted);
        assert_eq!(store.save_at(entry.clone(), later), SaveOutcome::Updated);

        assert_eq!(store.len(), 1);
        let stored = store.get(entry.id()).unwrap();
        assert_eq!(stored.touched_at, later);
        assert_eq!(stored.title, "Trip");
    }

    #[test]
    fn toggle_bookmark_reports_missing_ids() {
        let mut store = EntryStore::new();
        let draft = store.create_draft();

        assert!(store.toggle_bookmark(draft.id()).unwrap());
        assert!(!store.toggle_bookmark(draft.id()).unwrap());

        let missing = EntryId::new();
        assert!(matches!(
            store.toggle_bookmark(missing),
            Err(DaybookError::NotFound(id)) if id == missing
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn held_snapshots_are_not_affected_by_mutations() {
        let mut store = EntryStore::new();
        let held = store.create_draft();
        store.toggle_bookmark(held.id()).unwrap();

        assert!(!held.is_bookmarked);
        assert!(store.get(held.id()).unwrap().is_bookmarked);
    }

    #[test]
    fn subscribers_observe_mutations_after_they_apply() {
        let mut store = EntryStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |change| sink.borrow_mut().push(*change));

        let draft = store.create_draft();
        store.save(draft.with_text("a", "b"));
        store.toggle_bookmark(draft.id()).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                StoreChange::Inserted(draft.id()),
                StoreChange::Updated(draft.id()),
                StoreChange::Updated(draft.id()),
            ]
        );
    }

    #[test]
    fn with_entries_replaces_duplicate_ids() {
        let entry = Entry::new("one", "");
        let replacement = entry.with_text("two", "");
        let store = EntryStore::with_entries(vec![entry, replacement]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].title, "two");
    }
}
