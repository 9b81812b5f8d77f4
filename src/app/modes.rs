//! Input mode types for the application.
//!
//! The current [`InputMode`] decides which keybindings are active and which footer
//! hints are shown. It is never stored: [`AppState::input_mode`](super::AppState::input_mode)
//! derives it from the pending-delete slot, the editor session and the search focus,
//! checked in that order.
//!
//! # State Machine
//!
//! - **Normal**: browse the list, open/create/bookmark/delete entries
//! - **Search**: typing a query, or navigating the filtered results
//! - **Editing**: an editor session is open on one entry
//! - **`ConfirmDelete`**: a delete candidate awaits confirmation
//!
//! # Example
//!
//! ```rust
//! use daybook::app::modes::{EditorField, InputMode, SearchFocus};
//!
//! let searching = InputMode::Search(SearchFocus::Typing);
//! let editing = InputMode::Editing(EditorField::Body);
//! assert_ne!(searching, editing);
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered results.
    ///
    /// Accepts j/k for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Field receiving keystrokes in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    /// Single-line title.
    Title,
    /// Multi-line body.
    Body,
}

impl EditorField {
    /// The other field.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Title => Self::Body,
            Self::Body => Self::Title,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Available keybindings: j/k (navigate), enter (open), n (new), b (bookmark),
    /// d (delete), s (sort), / (search), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),

    /// An editor session is open; keystrokes go to the focused field.
    Editing(EditorField),

    /// A delete is pending; only confirm or cancel are accepted.
    ConfirmDelete,
}
