//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar and sort line
//! - [`footer`]: Status message and keybinding hints
//! - [`search`]: Search input box
//! - [`list`]: Entry rows (title, date, preview)
//! - [`empty`]: Empty state message
//! - [`editor`]: Title and body editor
//! - [`dialog`]: Delete confirmation box
//!
//! # Layout Modes
//!
//! - [`render_list_mode`]: Header + optional `SearchBar` + entries or empty state + Footer
//! - [`render_editor_mode`]: Header + Editor + Footer
//!
//! The delete dialog is drawn last, over either layout.

mod dialog;
mod editor;
mod empty;
mod footer;
mod header;
mod list;
mod search;

pub use dialog::render_dialog;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EditorPane, HeaderInfo, UIViewModel};

use editor::render_editor;
use empty::render_empty_state;
use footer::render_footer;
use header::{render_header, render_sort_line};
use list::render_entry_rows;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row. Returns row + 1.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the bottom border and the footer on the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.max(2);
    let border_row = footer_start - 1;

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the list layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Sort line]
/// [Search Bar - 3 lines, search mode only]
/// [Entry rows, 3 lines each | Empty state]
/// [Border]
/// [Footer]
/// ```
///
/// Reserves 6 lines for chrome, 9 with the search bar. Matches the accounting in
/// `AppState::compute_viewmodel`.
pub fn render_list_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_sort_line(current_row, &vm.header, theme, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        render_entry_rows(current_row, &vm.rows, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the editor layout.
///
/// ```text
/// [blank line]
/// [Header: "New Entry" | "Edit Entry"]
/// [Border]
/// [Editor]
/// [Border]
/// [Footer]
/// ```
pub fn render_editor_mode(
    vm: &UIViewModel,
    pane: &EditorPane,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let header = HeaderInfo {
        title: format!(" {} ", pane.heading),
        sort_label: String::new(),
    };

    let mut current_row = 2;
    current_row = render_header(current_row, &header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_editor(current_row + 1, rows.saturating_sub(1), pane, theme, cols);

    render_bottom(vm, theme, cols, rows);
}
