//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. State
//! changes never need an action: the journal lives in memory and the re-render flag
//! returned alongside the actions covers the display. Actions are reserved for
//! effects outside the plugin's own state.
//!
//! # Example
//!
//! ```rust
//! use daybook::app::Action;
//!
//! let actions = vec![Action::CloseFocus];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,
}
