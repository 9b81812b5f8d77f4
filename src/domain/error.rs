//! Error types for the Daybook journal.
//!
//! This module defines the centralized error type [`DaybookError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The journal core is deliberately narrow: only [`DaybookError::NotFound`] can be
//! produced by entry operations. Every other variant belongs to plugin start-up
//! (themes, configuration, seed data, log files).

use super::entry::EntryId;
use thiserror::Error;

/// The main error type for Daybook operations.
///
/// # Examples
///
/// ```
/// use daybook::domain::{DaybookError, EntryId};
///
/// let id = EntryId::new();
/// let err = DaybookError::NotFound(id);
/// assert!(err.to_string().starts_with("Entry not found"));
/// ```
#[derive(Debug, Error)]
pub enum DaybookError {
    /// The referenced entry is not in the store.
    ///
    /// Raised by bookmark toggles and delete confirmations that carry a stale id.
    /// Callers recover by re-reading the visible list; the store is unchanged.
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedded sample entries could not be parsed.
    #[error("Seed data error: {0}")]
    Seed(String),
}

/// A specialized `Result` type for Daybook operations.
///
/// This is a type alias for `std::result::Result<T, DaybookError>`.
pub type Result<T> = std::result::Result<T, DaybookError>;
