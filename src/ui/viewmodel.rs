//! View model types representing renderable UI state.
//!
//! View models are computed from application state by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They contain no business logic, only display-ready
//! data: truncated titles, formatted dates, highlight ranges and selection flags.
//!
//! # Example
//!
//! ```rust
//! use daybook::ui::viewmodel::EntryRow;
//!
//! let row = EntryRow {
//!     title: "My Birthday".to_string(),
//!     date: "22/10/2025".to_string(),
//!     preview: "Dinner by the water...".to_string(),
//!     is_bookmarked: true,
//!     is_selected: false,
//!     highlight_ranges: vec![(3, 7)],
//! };
//! assert!(row.is_bookmarked);
//! ```

use crate::app::modes::EditorField;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Entries in the visible window, in display order.
    pub rows: Vec<EntryRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Header information (title, sort mode).
    pub header: HeaderInfo,

    /// Footer information (keybindings, status message).
    pub footer: FooterInfo,

    /// Shown instead of the list when nothing is visible.
    pub empty_state: Option<EmptyState>,

    /// Present while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Present while an editor session is open; replaces the list.
    pub editor: Option<EditorPane>,

    /// Present while a delete awaits confirmation; drawn over the list.
    pub dialog: Option<DeleteDialog>,
}

/// Display information for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRow {
    /// Title, or the untitled placeholder, truncated to fit.
    pub title: String,

    /// Date in `dd/MM/yyyy`.
    pub date: String,

    /// One-line body preview.
    pub preview: String,

    pub is_bookmarked: bool,

    pub is_selected: bool,

    /// Character ranges of `title` matching the search text.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, including the visible entry count.
    pub title: String,

    /// Label of the active sort mode.
    pub sort_label: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,

    /// Transient message from the last intent (e.g. "Entry deleted").
    pub status: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "Begin Your Journal").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search text.
    pub query: String,

    /// Whether keystrokes currently go to the search field.
    pub is_typing: bool,
}

/// Editor display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorPane {
    /// "New Entry" or "Edit Entry".
    pub heading: String,

    /// Title buffer.
    pub title: String,

    /// Body buffer split into lines.
    pub body_lines: Vec<String>,

    /// Abbreviated date shown under the title.
    pub date: String,

    /// Relative age of the stored entry ("3h ago"), for existing entries only.
    pub last_saved: Option<String>,

    /// Whether the buffer differs from the stored entry.
    pub is_dirty: bool,

    pub focus: EditorField,

    /// Whether the save key currently does anything.
    pub can_save: bool,
}

/// Delete confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDialog {
    /// Dialog title ("Delete Journal?").
    pub title: String,

    /// Confirmation question.
    pub message: String,

    /// Title of the entry about to be deleted.
    pub entry_title: String,
}
