//! Empty state component renderer.
//!
//! Shown in place of the list when the journal is empty or the search matches
//! nothing.

use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message starting at `row`.
///
/// # Layout
///
/// ```text
/// [blank]
/// [padding] Begin Your Journal [padding]
/// [padding] Craft your personal diary, press n to begin. [padding]
/// ```
///
/// The message uses `empty_state_fg` in bold, the subtitle `text_dim`. Returns the
/// row after the subtitle.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.empty_state_fg));
    helpers::print_centered(row + 1, &empty.message, &message_style, cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    helpers::print_centered(row + 2, &empty.subtitle, &subtitle_style, cols);

    row + 3
}
