//! Theme management and ANSI escape sequence generation.
//!
//! Colors come from built-in themes embedded at compile time or from custom TOML
//! files. Hex colors are turned into 24-bit ANSI escape sequences at render time.
//!
//! # Built-in Themes
//!
//! - `glass-dark`: Lavender on deep violet (default)
//! - `glass-light`: Violet on white
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6e1f9"
//! selection_fg = "#1b1730"
//! selection_bg = "#b9a7f5"
//! text_normal = "#e6e1f9"
//! text_dim = "#8a84a3"
//! border = "#4a4468"
//! search_bar_border = "#b9a7f5"
//! match_highlight_fg = "#1b1730"
//! match_highlight_bg = "#f6d58e"
//! empty_state_fg = "#b9a7f5"
//! title_fg = "#c9bbff"
//! bookmark_fg = "#f6d58e"
//! date_fg = "#9d97b8"
//! dialog_border = "#f28b9a"
//! danger_fg = "#f28b9a"
//! ```
//!
//! # Example
//!
//! ```rust
//! use daybook::ui::theme::Theme;
//!
//! let theme = Theme::from_name("glass-dark").unwrap();
//! let title = format!("{}My Journal{}", Theme::fg(&theme.colors.title_fg), Theme::reset());
//! assert!(title.starts_with("\u{1b}[38;2;"));
//! ```

use crate::domain::error::{DaybookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#e6e1f9").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal text color (previews, editor body).
    pub text_normal: String,
    /// Dimmed text color (footer, hints).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Entry title color.
    pub title_fg: String,
    /// Bookmark marker color.
    pub bookmark_fg: String,
    /// Entry date color.
    pub date_fg: String,

    /// Delete dialog frame color.
    pub dialog_border: String,
    /// Destructive action text color.
    pub danger_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `glass-dark`, `glass-light`. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "glass-dark" => include_str!("../../themes/glass-dark.toml"),
            "glass-light" => include_str!("../../themes/glass-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DaybookError::Io`] if the file cannot be read, and
    /// [`DaybookError::Theme`] if its contents are not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| DaybookError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim, etc.).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`glass-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which a unit test rules out.
    fn default() -> Self {
        Self::from_name("glass-dark").expect("built-in glass-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::from_name("glass-dark").unwrap().name, "glass-dark");
        assert_eq!(Theme::from_name("glass-light").unwrap().name, "glass-light");
        assert!(Theme::from_name("sepia").is_none());
    }

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::fg("#c9bbff"), "\u{1b}[38;2;201;187;255m");
        assert_eq!(Theme::bg("nope"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn theme_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, include_str!("../../themes/glass-light.toml")).unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme, Theme::from_name("glass-light").unwrap());

        assert!(matches!(
            Theme::from_file(dir.path().join("missing.toml")),
            Err(DaybookError::Io(_))
        ));

        fs::write(&path, "name = \"broken\"").unwrap();
        assert!(matches!(Theme::from_file(&path), Err(DaybookError::Theme(_))));
    }
}
