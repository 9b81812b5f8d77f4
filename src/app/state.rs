//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the journal view-model. It owns the
//! [`EntryStore`] together with the session inputs of the visible list (sort mode
//! and search text) and the transient UI state (selection, search focus, editor
//! session, status message).
//!
//! # Architecture
//!
//! `AppState` keeps one source of truth per concern:
//!
//! - **Entries, drafts, pending delete**: the store
//! - **Visible list**: derived on every read by [`storage::project`], never cached
//! - **Input mode**: derived by [`AppState::input_mode`] from the fields above
//!
//! Every intent that can change the visible list clamps the selection afterwards, so
//! the cursor always points at a visible entry or at index 0 when nothing is visible.
//!
//! # Example
//!
//! ```rust
//! use daybook::app::AppState;
//! use daybook::domain::{Entry, SortMode};
//! use daybook::storage::EntryStore;
//! use daybook::ui::Theme;
//!
//! let store = EntryStore::with_entries(vec![Entry::new("Trip", "Paris")]);
//! let mut state = AppState::new(store, SortMode::ByDate, Theme::default());
//!
//! state.set_search_text("par");
//! assert_eq!(state.visible_entries().len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.rows.len(), 1);
//! ```

use super::editor::{EditOrigin, EditorSession};
use super::modes::{InputMode, SearchFocus};
use crate::domain::error::Result;
use crate::domain::{Entry, EntryId, SortMode};
use crate::storage::{self, EntryStore, SaveOutcome};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DeleteDialog, EditorPane, EmptyState, EntryRow, FooterInfo, HeaderInfo, SearchBarInfo,
    UIViewModel,
};

/// Screen lines used by one entry: title line, preview line, spacer.
const ROW_HEIGHT: usize = 3;

/// Widest title shown in the list before truncation.
const TITLE_WIDTH: usize = 40;

/// Central application state container.
///
/// Mutated by the event handler in response to user intents. View models are
/// computed on demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    store: EntryStore,
    sort_mode: SortMode,
    search_text: String,

    /// Search focus, `None` outside search mode.
    pub search_focus: Option<SearchFocus>,

    /// Zero-based index of the selected entry within the visible list.
    pub selected_index: usize,

    /// Open editor session, if any.
    pub editor: Option<EditorSession>,

    /// Message from the last intent, shown in the footer.
    pub status: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates application state around an existing store.
    #[must_use]
    pub fn new(store: EntryStore, sort_mode: SortMode, theme: Theme) -> Self {
        Self {
            store,
            sort_mode,
            search_text: String::new(),
            search_focus: None,
            selected_index: 0,
            editor: None,
            status: None,
            theme,
        }
    }

    /// Read access to the canonical store.
    #[must_use]
    pub const fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Write access to the canonical store, e.g. to subscribe to changes.
    ///
    /// Mutating entries through this handle bypasses selection clamping; prefer the
    /// intent methods on `AppState`.
    pub fn store_mut(&mut self) -> &mut EntryStore {
        &mut self.store
    }

    // ---- intents -------------------------------------------------------------

    /// Inserts a blank draft and returns it.
    pub fn create_draft(&mut self) -> Entry {
        let draft = self.store.create_draft();
        self.clamp_selection();
        draft
    }

    /// Upserts an entry, refreshing its timestamp.
    pub fn save(&mut self, entry: Entry) -> SaveOutcome {
        let outcome = self.store.save(entry);
        self.clamp_selection();
        outcome
    }

    /// Flips the bookmark flag of an entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id is not in the store.
    pub fn toggle_bookmark(&mut self, id: EntryId) -> Result<bool> {
        let flag = self.store.toggle_bookmark(id)?;
        self.clamp_selection();
        Ok(flag)
    }

    /// Replaces the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        tracing::trace!(query = %self.search_text, "search text updated");
        self.clamp_selection();
    }

    /// Replaces the sort mode.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        tracing::debug!(sort_mode = ?mode, "sort mode changed");
        self.sort_mode = mode;
        self.clamp_selection();
    }

    /// Arms the pending delete with `id`.
    pub fn request_delete(&mut self, id: EntryId) {
        self.store.request_delete(id);
    }

    /// Removes the pending candidate, if any.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the candidate disappeared before confirmation.
    pub fn confirm_delete(&mut self) -> Result<Option<Entry>> {
        let removed = self.store.confirm_delete();
        self.clamp_selection();
        removed
    }

    /// Disarms the pending delete without removing anything.
    pub fn cancel_delete(&mut self) -> Option<EntryId> {
        self.store.cancel_delete()
    }

    // ---- queries -------------------------------------------------------------

    /// The list to display, recomputed from the store on every call.
    #[must_use]
    pub fn visible_entries(&self) -> Vec<Entry> {
        storage::project(self.store.entries(), self.sort_mode, &self.search_text)
    }

    /// The entry awaiting delete confirmation, if any.
    #[must_use]
    pub fn pending_delete_target(&self) -> Option<&Entry> {
        self.store.pending_delete_target()
    }

    #[must_use]
    pub const fn current_sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    #[must_use]
    pub fn current_search_text(&self) -> &str {
        &self.search_text
    }

    /// Derives the input mode: pending delete, then editor, then search, then normal.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.store.pending_delete().is_some() {
            InputMode::ConfirmDelete
        } else if let Some(editor) = &self.editor {
            InputMode::Editing(editor.focus)
        } else if let Some(focus) = self.search_focus {
            InputMode::Search(focus)
        } else {
            InputMode::Normal
        }
    }

    // ---- selection -----------------------------------------------------------

    /// The selected entry, if anything is visible.
    #[must_use]
    pub fn selected_entry(&self) -> Option<Entry> {
        self.visible_entries().into_iter().nth(self.selected_index)
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let count = self.visible_entries().len();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let count = self.visible_entries().len();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Moves the cursor onto `id` if it is visible. Returns `true` on success.
    pub fn select(&mut self, id: EntryId) -> bool {
        match self.visible_entries().iter().position(|entry| entry.id() == id) {
            Some(index) => {
                self.selected_index = index;
                true
            }
            None => false,
        }
    }

    /// Keeps the cursor within the visible list.
    pub fn clamp_selection(&mut self) {
        let count = self.visible_entries().len();
        if count == 0 {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(count - 1);
        }
    }

    // ---- editor --------------------------------------------------------------

    /// Creates a draft, selects it, and opens the editor on it.
    pub fn begin_new_entry(&mut self) -> EntryId {
        let draft = self.create_draft();
        let id = draft.id();
        self.select(id);
        self.editor = Some(EditorSession::open(draft, EditOrigin::NewDraft));
        tracing::debug!(entry_id = %id, "editing new draft");
        id
    }

    /// Opens the editor on the selected entry. Returns `false` if nothing is selected.
    pub fn open_selected(&mut self) -> bool {
        let Some(entry) = self.selected_entry() else {
            return false;
        };
        tracing::debug!(entry_id = %entry.id(), "editing existing entry");
        self.editor = Some(EditorSession::open(entry, EditOrigin::Existing));
        true
    }

    /// Saves the editor buffer and closes the editor.
    ///
    /// Returns `None` (editor stays open) when there is no session or the body is
    /// blank.
    pub fn save_editor(&mut self) -> Option<SaveOutcome> {
        let session = self.editor.as_ref()?;
        if !session.can_save() {
            self.status = Some("Write something before saving".to_string());
            return None;
        }

        let session = self.editor.take()?;
        let id = session.entry_id();
        let mut entry = session.compose();
        if let Some(stored) = self.store.get(id) {
            entry = entry.bookmarked(stored.is_bookmarked);
        }

        let outcome = self.save(entry);
        self.select(id);
        self.status = Some("Entry saved".to_string());
        Some(outcome)
    }

    /// Closes the editor. Returns `true` if a blank draft was discarded.
    ///
    /// Edits to an existing entry are dropped. A new draft is either discarded (blank
    /// buffer) or kept with whatever was typed, so no unsaved draft outlives its
    /// editor.
    pub fn cancel_editor(&mut self) -> bool {
        let Some(session) = self.editor.take() else {
            return false;
        };
        let composed = session.compose();
        let id = composed.id();

        if self.store.discard_if_blank_draft(&composed) {
            self.status = Some("Empty draft discarded".to_string());
            self.clamp_selection();
            return true;
        }

        if self.store.is_draft(id) {
            tracing::debug!(entry_id = %id, "keeping typed draft");
            self.save(composed);
            self.select(id);
            self.status = Some("Draft kept".to_string());
        }
        self.clamp_selection();
        false
    }

    // ---- view model ----------------------------------------------------------

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate rows left after UI chrome, divide by the height of one entry
    /// 2. Center the window around the selected entry
    /// 3. Shift the window back if it would run past the end
    /// 4. Report the selection relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let visible = self.visible_entries();

        let mut viewmodel = UIViewModel {
            rows: vec![],
            selected_index: 0,
            header: self.compute_header(visible.len()),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            editor: self.compute_editor_pane(),
            dialog: self.compute_dialog(),
        };

        if viewmodel.editor.is_some() {
            return viewmodel;
        }

        if visible.is_empty() {
            viewmodel.empty_state = Some(self.compute_empty_state());
            return viewmodel;
        }

        let selected = self.selected_index.min(visible.len() - 1);
        let per_screen = (self.calculate_available_rows(rows) / ROW_HEIGHT).max(1);

        let mut visible_start = selected.saturating_sub(per_screen / 2);
        let visible_end = (visible_start + per_screen).min(visible.len());
        if visible_end - visible_start < per_screen && visible.len() >= per_screen {
            visible_start = visible_end.saturating_sub(per_screen);
        }

        let needle = storage::normalize_query(&self.search_text);
        viewmodel.rows = visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                Self::compute_row(entry, visible_start + offset == selected, &needle, cols)
            })
            .collect();
        viewmodel.selected_index = selected - visible_start;

        viewmodel
    }

    fn compute_row(entry: &Entry, is_selected: bool, needle: &str, cols: usize) -> EntryRow {
        const DATE_COLUMN_WIDTH: usize = 14;

        let title = truncate(entry.display_title(), TITLE_WIDTH);
        // Ranges stop before the ellipsis of a truncated title.
        let shown_chars = if title == entry.display_title() {
            title.chars().count()
        } else {
            TITLE_WIDTH.saturating_sub(3)
        };
        let highlight_ranges = storage::match_range(entry.display_title(), needle)
            .map(|(start, end)| (start, end.min(shown_chars)))
            .filter(|(start, end)| start < end)
            .into_iter()
            .collect();

        EntryRow {
            title,
            date: entry.short_date(),
            preview: entry.preview(cols.saturating_sub(DATE_COLUMN_WIDTH).max(10)),
            is_bookmarked: entry.is_bookmarked,
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self, visible_count: usize) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Journal ({visible_count}) "),
            sort_label: self.sort_mode.label().to_string(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode() {
            InputMode::ConfirmDelete => "y/Enter: delete  n/ESC: cancel",
            InputMode::Editing(_) => "Tab: switch field  Ctrl+s: save  ESC: cancel",
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: navigate  Enter: open  b: bookmark  d: delete"
            }
            InputMode::Normal => {
                "j/k: navigate  Enter: open  n: new  b: bookmark  d: delete  s: sort  /: search  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            status: self.status.clone(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.search_focus.is_none() && self.search_text.is_empty() {
            return None;
        }
        Some(SearchBarInfo {
            query: self.search_text.clone(),
            is_typing: self.search_focus == Some(SearchFocus::Typing),
        })
    }

    fn compute_editor_pane(&self) -> Option<EditorPane> {
        let session = self.editor.as_ref()?;
        let heading = match session.origin() {
            EditOrigin::NewDraft => "New Entry",
            EditOrigin::Existing => "Edit Entry",
        };

        Some(EditorPane {
            heading: heading.to_string(),
            title: session.title.clone(),
            body_lines: session.body.split('\n').map(String::from).collect(),
            date: chrono::Utc::now().format("%b %-d, %Y").to_string(),
            last_saved: (session.origin() == EditOrigin::Existing)
                .then(|| session.base().time_ago()),
            is_dirty: session.is_dirty(),
            focus: session.focus,
            can_save: session.can_save(),
        })
    }

    fn compute_dialog(&self) -> Option<DeleteDialog> {
        let target = self.pending_delete_target()?;
        Some(DeleteDialog {
            title: "Delete Journal?".to_string(),
            message: "Are you sure you want to delete this journal?".to_string(),
            entry_title: truncate(target.display_title(), TITLE_WIDTH),
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.store.is_empty() {
            EmptyState {
                message: "Begin Your Journal".to_string(),
                subtitle: "Craft your personal diary, press n to begin.".to_string(),
            }
        } else {
            EmptyState {
                message: "No matching entries".to_string(),
                subtitle: "Try a different search".to_string(),
            }
        }
    }

    /// Rows available for the entry list after header, borders, footer and search bar.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        if self.compute_search_bar().is_some() {
            total_rows.saturating_sub(9)
        } else {
            total_rows.saturating_sub(6)
        }
    }
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::EditorField;
    use chrono::{Duration, TimeZone, Utc};

    fn state_with(entries: Vec<Entry>) -> AppState {
        AppState::new(EntryStore::with_entries(entries), SortMode::ByDate, Theme::default())
    }

    fn dated(title: &str, hours: i64) -> Entry {
        let base = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
        Entry::new(title, "body").touched(base + Duration::hours(hours))
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut state = state_with(vec![dated("a", 0), dated("b", 1), dated("c", 2)]);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);

        state.selected_index = 2;
        state.set_search_text("a");
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_entry().unwrap().title, "a");
    }

    #[test]
    fn input_mode_priority() {
        let mut state = state_with(vec![dated("a", 0)]);
        assert_eq!(state.input_mode(), InputMode::Normal);

        state.search_focus = Some(SearchFocus::Typing);
        assert_eq!(state.input_mode(), InputMode::Search(SearchFocus::Typing));

        state.begin_new_entry();
        assert_eq!(state.input_mode(), InputMode::Editing(EditorField::Title));

        let id = state.visible_entries()[0].id();
        state.request_delete(id);
        assert_eq!(state.input_mode(), InputMode::ConfirmDelete);
    }

    #[test]
    fn editor_save_is_gated_on_body() {
        let mut state = state_with(vec![]);
        let id = state.begin_new_entry();

        state.editor.as_mut().unwrap().title = "Only a title".to_string();
        assert!(state.save_editor().is_none());
        assert!(state.editor.is_some());

        state.editor.as_mut().unwrap().body = "Now a body".to_string();
        assert_eq!(state.save_editor(), Some(SaveOutcome::Updated));
        assert!(state.editor.is_none());
        assert!(!state.store().is_draft(id));
        assert_eq!(state.store().get(id).unwrap().body, "Now a body");
    }

    #[test]
    fn cancelling_blank_new_draft_discards_it() {
        let mut state = state_with(vec![dated("a", 0)]);
        let id = state.begin_new_entry();

        assert!(state.cancel_editor());
        assert!(!state.store().contains(id));
        assert_eq!(state.store().len(), 1);
    }

    #[test]
    fn cancelling_populated_draft_keeps_it() {
        let mut state = state_with(vec![]);
        let id = state.begin_new_entry();
        state.editor.as_mut().unwrap().title = "Keep me".to_string();

        assert!(!state.cancel_editor());
        assert_eq!(state.store().get(id).unwrap().title, "Keep me");
        assert!(!state.store().is_draft(id));
        assert_eq!(state.selected_entry().unwrap().id(), id);
    }

    #[test]
    fn cancelling_existing_entry_drops_the_edit() {
        let entry = Entry::new("Trip", "Paris");
        let id = entry.id();
        let mut state = state_with(vec![entry]);

        assert!(state.open_selected());
        state.editor.as_mut().unwrap().title = "Changed".to_string();

        assert!(!state.cancel_editor());
        assert_eq!(state.store().get(id).unwrap().title, "Trip");
    }

    #[test]
    fn cancelling_existing_blank_entry_keeps_it() {
        let blank = Entry::blank();
        let id = blank.id();
        let mut state = state_with(vec![blank]);

        assert!(state.open_selected());
        assert!(!state.cancel_editor());
        assert!(state.store().contains(id));
    }

    #[test]
    fn viewmodel_reports_empty_states() {
        let state = state_with(vec![]);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "Begin Your Journal");

        let mut state = state_with(vec![dated("a", 0)]);
        state.set_search_text("zzz");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No matching entries");
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn viewmodel_windows_around_selection() {
        let entries = (0..20).map(|i| dated(&format!("e{i}"), i)).collect();
        let mut state = state_with(entries);
        state.selected_index = 19;

        // 24 rows - 6 chrome = 18 rows = 6 entries
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows.len(), 6);
        assert!(vm.rows[vm.selected_index].is_selected);
        assert_eq!(vm.rows[vm.selected_index].title, "e0");
    }

    #[test]
    fn viewmodel_highlights_title_matches() {
        let mut state = state_with(vec![Entry::new("Paris Trip", "")]);
        state.set_search_text("trip");

        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.rows[0].highlight_ranges, vec![(6, 10)]);
    }

    #[test]
    fn dialog_names_the_pending_entry() {
        let entry = dated("Doomed", 0);
        let mut state = state_with(vec![entry.clone()]);
        state.request_delete(entry.id());

        let dialog = state.compute_viewmodel(24, 80).dialog.unwrap();
        assert_eq!(dialog.title, "Delete Journal?");
        assert_eq!(dialog.entry_title, "Doomed");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééééééééé", 6), "ééé...");
    }
}
