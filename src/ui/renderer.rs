//! Top-level rendering coordinator.
//!
//! The renderer works in two steps:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use daybook::app::AppState;
//! use daybook::domain::SortMode;
//! use daybook::storage::EntryStore;
//! use daybook::ui::{render, Theme};
//!
//! let state = AppState::new(EntryStore::new(), SortMode::ByDate, Theme::default());
//! render(&state, 24, 80);
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear the
/// screen; Zellij hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
///
/// - Editor open: editor layout
/// - Otherwise: list layout, with search bar and empty state as present
/// - Pending delete: dialog on top
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(pane) = &vm.editor {
        components::render_editor_mode(vm, pane, theme, cols, rows);
    } else {
        components::render_list_mode(vm, theme, cols, rows);
    }

    if let Some(dialog) = &vm.dialog {
        components::render_dialog(dialog, theme, rows, cols);
    }
}
