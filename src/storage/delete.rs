//! Two-phase delete workflow layered over [`EntryStore`].
//!
//! # State Machine
//!
//! ```text
//!              request_delete(x)
//!   Idle ─────────────────────────▶ PendingConfirmation(x)
//!    ▲                                  │    │    ▲
//!    │        confirm_delete()          │    │    │ request_delete(y)
//!    ├──────── (x removed) ◀────────────┘    │    │ (x stays, y pending)
//!    │        cancel_delete()                │    │
//!    └──────── (nothing removed) ◀───────────┘────┘
//! ```
//!
//! Only one candidate can be pending. Blank drafts abandoned in the editor go through
//! the same request/confirm pair via [`EntryStore::discard_if_blank_draft`].

use super::entry_store::EntryStore;
use super::notify::StoreChange;
use crate::domain::error::{DaybookError, Result};
use crate::domain::{Entry, EntryId};

/// Current phase of the delete workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePhase {
    /// No delete in progress.
    Idle,
    /// An entry awaits explicit confirmation.
    PendingConfirmation(EntryId),
}

impl EntryStore {
    /// Returns the current workflow phase.
    #[must_use]
    pub fn delete_phase(&self) -> DeletePhase {
        self.pending_delete
            .map_or(DeletePhase::Idle, DeletePhase::PendingConfirmation)
    }

    /// Id of the pending delete candidate, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<EntryId> {
        self.pending_delete
    }

    /// The entry awaiting confirmation, if it is still present.
    #[must_use]
    pub fn pending_delete_target(&self) -> Option<&Entry> {
        self.pending_delete.and_then(|id| self.get(id))
    }

    /// Arms the pending-delete slot with `id`, replacing any earlier candidate.
    ///
    /// Nothing is removed until [`EntryStore::confirm_delete`].
    pub fn request_delete(&mut self, id: EntryId) {
        let _span = tracing::debug_span!("request_delete", entry_id = %id).entered();

        if self.pending_delete == Some(id) {
            tracing::trace!("candidate already pending");
            return;
        }
        if let Some(previous) = self.pending_delete.replace(id) {
            tracing::debug!(previous = %previous, "pending candidate replaced");
        }
        self.emit(StoreChange::PendingDelete(Some(id)));
    }

    /// Removes the pending candidate and returns it.
    ///
    /// Returns `Ok(None)` when nothing is pending. The slot is cleared in every case.
    ///
    /// # Errors
    ///
    /// Returns [`DaybookError::NotFound`] if the candidate is no longer in the store.
    pub fn confirm_delete(&mut self) -> Result<Option<Entry>> {
        let Some(id) = self.pending_delete.take() else {
            tracing::trace!("confirm_delete with nothing pending");
            return Ok(None);
        };

        let _span = tracing::debug_span!("confirm_delete", entry_id = %id).entered();

        let Some(index) = self.position(id) else {
            tracing::debug!("pending candidate vanished before confirmation");
            self.emit(StoreChange::PendingDelete(None));
            return Err(DaybookError::NotFound(id));
        };

        let removed = self.entries.remove(index);
        self.drafts.remove(&id);
        self.emit(StoreChange::Removed(id));
        self.emit(StoreChange::PendingDelete(None));

        tracing::debug!(entry_count = self.entries.len(), "entry deleted");
        Ok(Some(removed))
    }

    /// Clears the pending candidate without removing anything.
    ///
    /// Returns the candidate that was disarmed, if any.
    pub fn cancel_delete(&mut self) -> Option<EntryId> {
        let cancelled = self.pending_delete.take();
        if let Some(id) = cancelled {
            tracing::debug!(entry_id = %id, "delete cancelled");
            self.emit(StoreChange::PendingDelete(None));
        }
        cancelled
    }

    /// Deletes an unsaved draft whose editor content is blank.
    ///
    /// `candidate` is the snapshot composed from the editor buffer. The draft is
    /// removed only if it was created by [`EntryStore::create_draft`], has not been
    /// saved since, and `candidate` is blank after trimming. Pre-existing entries are
    /// never discarded, even when blank. Returns `true` if the draft was removed.
    pub fn discard_if_blank_draft(&mut self, candidate: &Entry) -> bool {
        let id = candidate.id();
        if !self.is_draft(id) || !candidate.is_blank() {
            return false;
        }

        tracing::debug!(entry_id = %id, "discarding blank draft");
        self.request_delete(id);
        matches!(self.confirm_delete(), Ok(Some(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> (EntryStore, Vec<EntryId>) {
        let entries: Vec<Entry> = titles.iter().map(|t| Entry::new(*t, "body")).collect();
        let ids = entries.iter().map(Entry::id).collect();
        (EntryStore::with_entries(entries), ids)
    }

    #[test]
    fn cancel_keeps_entry_and_clears_slot() {
        let (mut store, ids) = store_with(&["x"]);

        store.request_delete(ids[0]);
        assert_eq!(store.delete_phase(), DeletePhase::PendingConfirmation(ids[0]));
        assert_eq!(store.cancel_delete(), Some(ids[0]));

        assert!(store.contains(ids[0]));
        assert_eq!(store.delete_phase(), DeletePhase::Idle);
    }

    #[test]
    fn confirm_removes_entry_and_clears_slot() {
        let (mut store, ids) = store_with(&["x"]);

        store.request_delete(ids[0]);
        let removed = store.confirm_delete().unwrap();

        assert_eq!(removed.map(|e| e.id()), Some(ids[0]));
        assert!(store.is_empty());
        assert_eq!(store.pending_delete(), None);
    }

    #[test]
    fn confirm_with_nothing_pending_is_a_no_op() {
        let (mut store, _) = store_with(&["x", "y"]);

        assert!(store.confirm_delete().unwrap().is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn later_request_replaces_earlier_candidate() {
        let (mut store, ids) = store_with(&["x", "y"]);

        store.request_delete(ids[0]);
        store.request_delete(ids[1]);
        store.confirm_delete().unwrap();

        assert!(store.contains(ids[0]));
        assert!(!store.contains(ids[1]));
    }

    #[test]
    fn stale_candidate_reports_not_found() {
        let mut store = EntryStore::new();
        let ghost = EntryId::new();

        store.request_delete(ghost);
        assert!(matches!(store.confirm_delete(), Err(DaybookError::NotFound(id)) if id == ghost));
        assert_eq!(store.delete_phase(), DeletePhase::Idle);
    }

    #[test]
    fn only_blank_unsaved_drafts_are_discarded() {
        let mut store = EntryStore::new();

        let blank = store.create_draft();
        assert!(store.discard_if_blank_draft(&blank));
        assert!(!store.contains(blank.id()));

        let typed = store.create_draft();
        assert!(!store.discard_if_blank_draft(&typed.with_text("Title", "")));
        assert!(store.contains(typed.id()));

        let existing = Entry::blank();
        store.save(existing.clone());
        assert!(!store.discard_if_blank_draft(&existing));
        assert!(store.contains(existing.id()));
    }
}
