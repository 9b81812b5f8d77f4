//! Header component renderer.
//!
//! Renders the title bar and the sort line beneath the top border.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is centered, bold and padded to the full width. Returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }

    helpers::print_centered(row, &header.title, &style, cols);
    row + 1
}

/// Renders the active sort label right-aligned at the specified row.
///
/// ```text
///                                                   ⇅ Sort by Entry Date
/// ```
pub fn render_sort_line(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let label = helpers::clip(&format!("⇅ {} ", header.sort_label), cols);
    let label_len = helpers::width(&label);

    position_cursor(row, 1);
    print!("{}", " ".repeat(cols.saturating_sub(label_len)));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{label}");
    print!("{}", Theme::reset());
    row + 1
}
