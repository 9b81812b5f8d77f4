//! Entry list component renderer.
//!
//! Each entry takes three lines: title and date, a one-line body preview, and a
//! blank spacer.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EntryRow;

/// Width of the marker column in front of the title ("★ " or two spaces).
const MARKER_WIDTH: usize = 2;

/// Indent of the preview line, aligned with the title text.
const PREVIEW_INDENT: usize = 4;

/// Renders all rows starting at the specified row. Returns the next free row.
pub fn render_entry_rows(row: usize, rows: &[EntryRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for entry in rows {
        current_row = render_entry_row(current_row, entry, theme, cols);
    }
    current_row
}

/// Renders one entry.
///
/// # Layout
///
/// ```text
///   ★ My Birthday                                        22/10/2025
///     Dinner by the water with everyone...
/// ```
///
/// # Styling Precedence
///
/// 1. Selection background on the title line (if `is_selected`)
/// 2. Search match highlights (unless selected)
/// 3. Theme colors for title, bookmark marker, date and preview
fn render_entry_row(row: usize, entry: &EntryRow, theme: &Theme, cols: usize) -> usize {
    let base_style = if entry.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.title_fg)
    };

    position_cursor(row, 1);
    print!("{base_style}");
    print!("  ");

    if entry.is_bookmarked {
        if !entry.is_selected {
            print!("{}", Theme::fg(&theme.colors.bookmark_fg));
        }
        print!("★ ");
        print!("{base_style}");
    } else {
        print!("{}", " ".repeat(MARKER_WIDTH));
    }

    print!("{}", Theme::bold());
    helpers::render_highlighted_text(
        &entry.title,
        &entry.highlight_ranges,
        theme,
        entry.is_selected,
        &format!("{base_style}{}", Theme::bold()),
    );
    print!("{}", Theme::reset());
    print!("{base_style}");

    let used = 2 + MARKER_WIDTH + helpers::width(&entry.title);
    let date_len = helpers::width(&entry.date);
    let gap = cols.saturating_sub(used + date_len + 2);
    print!("{}", " ".repeat(gap));
    if !entry.is_selected {
        print!("{}", Theme::fg(&theme.colors.date_fg));
    }
    print!("{}  ", entry.date);
    print!("{}", Theme::reset());

    let preview = helpers::clip(&entry.preview, cols.saturating_sub(PREVIEW_INDENT));
    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(PREVIEW_INDENT));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{preview}");
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(PREVIEW_INDENT + helpers::width(&preview)))
    );
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(cols));

    row + 3
}
