//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user intents and
//! translates them into state changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime, already mapped from keys by input mode
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Events are applied one at a time, in the order they arrive. Each call returns
//! whether the UI needs a re-render alongside the actions.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `CloseFocus`
//! - **Entries**: `NewEntry`, `OpenSelected`, `ToggleBookmark`, `CycleSort`, `SetSortMode`
//! - **Delete**: `RequestDelete`, `ConfirmDelete`, `CancelDelete`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`, `SetSearchText`
//! - **Input**: `Char`, `Backspace`, `Escape`, routed by the current input mode
//! - **Editor**: `EditorNextField`, `EditorNewline`, `EditorSave`, `EditorCancel`
//!
//! # Example
//!
//! ```rust
//! use daybook::app::{AppState, handle_event, Event};
//! use daybook::domain::SortMode;
//! use daybook::storage::EntryStore;
//! use daybook::ui::Theme;
//!
//! let mut state = AppState::new(EntryStore::new(), SortMode::ByDate, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::NewEntry)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), daybook::domain::DaybookError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::SortMode;

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin UI.
    CloseFocus,

    /// Creates a draft and opens the editor on it.
    NewEntry,
    /// Opens the editor on the selected entry.
    OpenSelected,
    /// Flips the bookmark flag of the selected entry.
    ToggleBookmark,
    /// Switches to the next sort mode.
    CycleSort,
    /// Switches to the given sort mode.
    SetSortMode(SortMode),

    /// Arms a delete for the selected entry.
    RequestDelete,
    /// Removes the pending delete candidate.
    ConfirmDelete,
    /// Disarms the pending delete.
    CancelDelete,

    /// Enters search mode with typing focus and an empty query.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Replaces the search text outright.
    SetSearchText(String),

    /// Types a character into the search field or the editor.
    Char(char),
    /// Deletes the last character of the search field or the focused editor field.
    Backspace,
    /// Backs out of the current mode by one level.
    Escape,

    /// Switches editor focus between title and body.
    EditorNextField,
    /// Enter inside the editor.
    EditorNewline,
    /// Saves the editor buffer.
    EditorSave,
    /// Closes the editor without saving.
    EditorCancel,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the view changed, and the side effects to
/// run in sequence.
///
/// # Errors
///
/// Returns [`DaybookError::NotFound`](crate::domain::DaybookError::NotFound) when an
/// intent targets an entry that is no longer in the store. State is left consistent;
/// the caller reports the error and keeps running.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    state.status = None;

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::NewEntry => {
            state.begin_new_entry();
            Ok((true, vec![]))
        }
        Event::OpenSelected => {
            if state.open_selected() {
                return Ok((true, vec![]));
            }
            tracing::debug!("no entry selected");
            if matches!(state.input_mode(), InputMode::Search(_)) {
                tracing::debug!("exiting search mode (no selection)");
                exit_search(state);
                return Ok((true, vec![]));
            }
            Ok((false, vec![]))
        }
        Event::ToggleBookmark => {
            let Some(entry) = state.selected_entry() else {
                return Ok((false, vec![]));
            };
            let is_bookmarked = state.toggle_bookmark(entry.id())?;
            state.select(entry.id());
            state.status = Some(if is_bookmarked {
                "Bookmarked".to_string()
            } else {
                "Bookmark removed".to_string()
            });
            Ok((true, vec![]))
        }
        Event::CycleSort => {
            let next = state.current_sort_mode().next();
            set_sort_keeping_selection(state, next);
            Ok((true, vec![]))
        }
        Event::SetSortMode(mode) => {
            if state.current_sort_mode() == *mode {
                return Ok((false, vec![]));
            }
            set_sort_keeping_selection(state, *mode);
            Ok((true, vec![]))
        }
        Event::RequestDelete => {
            let Some(entry) = state.selected_entry() else {
                return Ok((false, vec![]));
            };
            state.request_delete(entry.id());
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => match state.confirm_delete()? {
            Some(removed) => {
                tracing::debug!(entry_id = %removed.id(), "entry deleted");
                state.status = Some("Entry deleted".to_string());
                Ok((true, vec![]))
            }
            None => Ok((false, vec![])),
        },
        Event::CancelDelete => Ok((state.cancel_delete().is_some(), vec![])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.search_focus = Some(SearchFocus::Typing);
            state.set_search_text(String::new());
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.search_focus = Some(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.current_search_text().trim().is_empty() {
                exit_search(state);
                return Ok((true, vec![]));
            }
            state.search_focus = Some(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.current_search_text(), "exiting search mode");
            exit_search(state);
            Ok((true, vec![]))
        }
        Event::SetSearchText(text) => {
            state.set_search_text(text.clone());
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode() {
            InputMode::Search(SearchFocus::Typing) => {
                let mut query = state.current_search_text().to_string();
                query.push(*c);
                state.set_search_text(query);
                Ok((true, vec![]))
            }
            InputMode::Editing(_) => {
                if let Some(editor) = state.editor.as_mut() {
                    editor.push_char(*c);
                }
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode() {
            InputMode::Search(SearchFocus::Typing) => {
                let mut query = state.current_search_text().to_string();
                query.pop();
                state.set_search_text(query);
                Ok((true, vec![]))
            }
            InputMode::Editing(_) => {
                if let Some(editor) = state.editor.as_mut() {
                    editor.backspace();
                }
                Ok((true, vec![]))
            }
            _ => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode() {
            InputMode::ConfirmDelete => {
                state.cancel_delete();
                Ok((true, vec![]))
            }
            InputMode::Editing(_) => {
                state.cancel_editor();
                Ok((true, vec![]))
            }
            InputMode::Search(_) => {
                exit_search(state);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![Action::CloseFocus])),
        },
        Event::EditorNextField => {
            let Some(editor) = state.editor.as_mut() else {
                return Ok((false, vec![]));
            };
            editor.toggle_focus();
            Ok((true, vec![]))
        }
        Event::EditorNewline => {
            let Some(editor) = state.editor.as_mut() else {
                return Ok((false, vec![]));
            };
            editor.newline();
            Ok((true, vec![]))
        }
        Event::EditorSave => {
            if state.editor.is_none() {
                return Ok((false, vec![]));
            }
            if let Some(outcome) = state.save_editor() {
                tracing::debug!(outcome = ?outcome, "editor saved");
            }
            Ok((true, vec![]))
        }
        Event::EditorCancel => {
            if state.editor.is_none() {
                return Ok((false, vec![]));
            }
            state.cancel_editor();
            Ok((true, vec![]))
        }
    }
}

fn exit_search(state: &mut AppState) {
    state.search_focus = None;
    state.set_search_text(String::new());
}

/// Changes the sort mode and moves the cursor to wherever the selected entry landed.
fn set_sort_keeping_selection(state: &mut AppState, mode: SortMode) {
    let selected = state.selected_entry().map(|entry| entry.id());
    state.set_sort_mode(mode);
    if let Some(id) = selected {
        state.select(id);
    }
}
