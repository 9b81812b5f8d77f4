//! Editor pane renderer.
//!
//! The editor replaces the list while a session is open: a title field, the
//! current date, and the body text below.

use crate::app::modes::EditorField;
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EditorPane;

const INDENT: usize = 2;

/// Renders the editor pane from `row` down to (not including) `last_row`.
///
/// # Layout
///
/// ```text
///   Paris Trip█
///   Oct 22, 2025  saved 3h ago  (modified)
///
///   Took the train at seven.
///   Lunch by the river.
/// ```
///
/// The focused field shows a block cursor. Body lines that do not fit are cut
/// from the top so the cursor line stays visible.
pub fn render_editor(row: usize, last_row: usize, pane: &EditorPane, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(INDENT * 2);

    let title_cursor = if pane.focus == EditorField::Title { "█" } else { "" };
    let title_text = if pane.title.is_empty() && pane.focus != EditorField::Title {
        format!("{}Title{}", Theme::dim(), Theme::reset())
    } else {
        helpers::clip(&format!("{}{title_cursor}", pane.title), width)
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(INDENT));
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.title_fg));
    print!("{title_text}");
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INDENT));
    print!("{}{}", Theme::fg(&theme.colors.date_fg), pane.date);
    if let Some(last_saved) = &pane.last_saved {
        print!("{}  saved {last_saved}", Theme::fg(&theme.colors.text_dim));
    }
    if pane.is_dirty {
        print!("{}  (modified)", Theme::fg(&theme.colors.bookmark_fg));
    }
    print!("{}", Theme::reset());

    let body_top = row + 3;
    let capacity = last_row.saturating_sub(body_top);
    let skip = pane.body_lines.len().saturating_sub(capacity);

    for (offset, line) in pane.body_lines.iter().skip(skip).enumerate() {
        let is_last = skip + offset + 1 == pane.body_lines.len();
        let cursor = if is_last && pane.focus == EditorField::Body { "█" } else { "" };
        let text = helpers::clip(&format!("{line}{cursor}"), width);

        position_cursor(body_top + offset, 1);
        print!("{}", " ".repeat(INDENT));
        print!("{}{text}", Theme::fg(&theme.colors.text_normal));
        print!("{}", Theme::reset());
    }

    if !pane.can_save && pane.body_lines.iter().all(|line| line.trim().is_empty()) {
        position_cursor(body_top, 1);
        print!("{}", " ".repeat(INDENT));
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        if pane.focus == EditorField::Body {
            print!("█");
        }
        print!("Start writing...");
        print!("{}", Theme::reset());
    }
}
