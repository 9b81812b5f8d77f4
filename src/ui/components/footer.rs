//! Footer component renderer.
//!
//! Renders the help bar: keybinding hints, preceded by the status message of the
//! last intent when there is one.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Hints are centered and dimmed. A status message, if present, is printed
/// left-aligned in the title color and the hints fill the rest of the line.
/// Text wider than the terminal is cut. Returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let Some(status) = &footer.status else {
        let style = Theme::fg(&theme.colors.text_dim);
        helpers::print_centered(row, &footer.keybindings, &style, cols);
        return row + 1;
    };

    let status = helpers::clip(&format!(" {status}  "), cols);
    let status_len = helpers::width(&status);
    let hints = helpers::clip(&footer.keybindings, cols.saturating_sub(status_len));
    let hints_len = helpers::width(&hints);

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg));
    print!("{status}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{hints}");
    print!("{}", " ".repeat(cols.saturating_sub(status_len + hints_len)));
    print!("{}", Theme::reset());
    row + 1
}
