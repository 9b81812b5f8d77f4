//! Shared rendering utilities and helpers.
//!
//! Low-level text output used across the UI components: cursor placement, centered
//! lines, and search match highlighting with ANSI escape sequences.
//!
//! All widths are counted in characters, not bytes, so titles with accents or
//! emoji line up the same as ASCII ones.
//!
//! # Example
//!
//! ```rust
//! use daybook::ui::helpers::render_highlighted_text;
//! use daybook::ui::Theme;
//!
//! let theme = Theme::default();
//! render_highlighted_text("Paris Trip", &[(6, 10)], &theme, false, "");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters.
#[must_use]
pub fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Prints `text` centered on `row`, padded with spaces to the full width.
///
/// `style` is emitted before the line and reset after it.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = clip(text, cols);
    let len = width(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are `(start, end)` character indices, end exclusive, in ascending order.
/// Ranges past the end of `text` are clipped. When `is_selected` is `true`,
/// highlighting is skipped so the selection background stays uniform. `restore` is
/// re-applied after each highlight so the surrounding style continues.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
    restore: &str,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_count_characters() {
        assert_eq!(width("Café"), 4);
        assert_eq!(clip("Café Noir", 4), "Café");
        assert_eq!(clip("ab", 10), "ab");
    }
}
