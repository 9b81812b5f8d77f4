//! Domain layer for the Daybook journal.
//!
//! This module contains the core domain types, independent of Zellij-specific APIs
//! or rendering concerns.
//!
//! # Organization
//!
//! - [`entry`]: The journal entry value type and its identifier
//! - [`error`]: Error types and result aliases
//! - [`sort`]: Sort modes for the visible entry list
//!
//! # Examples
//!
//! ```
//! use daybook::domain::{Entry, SortMode};
//!
//! let entry = Entry::new("Trip", "Paris");
//! assert!(!entry.is_blank());
//! assert_eq!(SortMode::default(), SortMode::ByDate);
//! ```

pub mod entry;
pub mod error;
pub mod sort;

pub use entry::{Entry, EntryId};
pub use error::{DaybookError, Result};
pub use sort::SortMode;
