//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain/storage
//! layers. It implements the event-driven architecture that powers the interactive
//! UI.
//!
//! # Architecture
//!
//! ```text
//! Keys → Events → Event Handler → State Mutations → Store Notifications
//!                       │                                   │
//!                       └──→ Actions          Re-render ←───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`editor`]: Edit buffer for one entry
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use daybook::app::{AppState, Event, handle_event};
//! use daybook::domain::SortMode;
//! use daybook::storage::EntryStore;
//! use daybook::ui::Theme;
//!
//! let mut state = AppState::new(EntryStore::new(), SortMode::ByDate, Theme::default());
//! let (should_render, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! # Ok::<(), daybook::domain::DaybookError>(())
//! ```

pub mod actions;
pub mod editor;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use editor::{EditOrigin, EditorSession};
pub use handler::{handle_event, Event};
pub use modes::{EditorField, InputMode, SearchFocus};
pub use state::AppState;
