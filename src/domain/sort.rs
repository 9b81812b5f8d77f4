//! Sort modes for the visible entry list.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordering applied to the visible entry list.
///
/// Session-wide state, changed only by an explicit user selection. Defaults to
/// [`SortMode::ByDate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Bookmarked entries first, newest first within each group.
    ByBookmark,

    /// Newest first, regardless of bookmark state.
    #[default]
    ByDate,
}

impl SortMode {
    /// Menu label for this mode.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ByBookmark => "Sort by Bookmark",
            Self::ByDate => "Sort by Entry Date",
        }
    }

    /// The other mode; used by the single-key sort toggle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ByBookmark => Self::ByDate,
            Self::ByDate => Self::ByBookmark,
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    /// Parses the `sort` configuration value (`bookmark` or `date`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bookmark" | "by_bookmark" | "bookmarks" => Ok(Self::ByBookmark),
            "date" | "by_date" => Ok(Self::ByDate),
            other => Err(format!("unknown sort mode `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_values() {
        assert_eq!("bookmark".parse::<SortMode>(), Ok(SortMode::ByBookmark));
        assert_eq!(" Date ".parse::<SortMode>(), Ok(SortMode::ByDate));
        assert!("alphabetical".parse::<SortMode>().is_err());
    }

    #[test]
    fn next_alternates() {
        assert_eq!(SortMode::ByDate.next(), SortMode::ByBookmark);
        assert_eq!(SortMode::ByBookmark.next(), SortMode::ByDate);
    }
}
