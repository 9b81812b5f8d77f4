//! Daybook: a Zellij plugin journal.
//!
//! Daybook keeps a list of dated journal entries in memory and provides:
//! - Creating and editing entries in a full-pane editor
//! - Bookmarking entries and sorting bookmarked entries first
//! - Case-insensitive search over titles and bodies
//! - Deleting entries behind a confirmation dialog
//! - Discarding blank drafts automatically when the editor is cancelled

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Editor sessions                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                               │
//! ┌──────────────────────┐   ┌──────────────────────────┐
//! │ UI Layer (ui/)       │   │ Storage Layer (storage/) │
//! │ - Rendering          │   │ - Entry store            │
//! │ - Theming            │   │ - Delete workflow        │
//! │ - Components         │   │ - List projection        │
//! └──────────────────────┘   └──────────────────────────┘
//!         │                               │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Entry model, sort modes, errors (domain/)        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing to a rotating log file                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Entry, `SortMode`, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: In-memory entry store, delete workflow and list projection
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/daybook.wasm" {
//!         theme "glass-dark"
//!         sort "bookmark"
//!         trace_level "debug"
//!         seed_samples "false"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use daybook::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     seed_samples: false,
//!     ..Default::default()
//! };
//! let mut state = initialize(&config);
//!
//! for event in [Event::NewEntry, Event::Char('H'), Event::EditorNewline, Event::Char('i')] {
//!     handle_event(&mut state, &event)?;
//! }
//! handle_event(&mut state, &Event::EditorSave)?;
//! assert_eq!(state.store().len(), 1);
//! # Ok::<(), daybook::DaybookError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{DaybookError, Entry, EntryId, Result, SortMode};
pub use storage::EntryStore;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/daybook.wasm" {
///     theme "glass-light"
///     theme_file "~/themes/mine.toml"
///     trace_level "debug"
///     sort "date"
///     seed_samples "true"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name (`glass-dark`, `glass-light`). Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: String,

    /// Initial sort mode. Default: by date
    pub sort_mode: SortMode,

    /// Whether the store starts with the sample entries. Default: `true`
    pub seed_samples: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            sort_mode: SortMode::default(),
            seed_samples: true,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `theme`, `theme_file`: taken as-is; empty values are ignored
    /// - `trace_level`: taken as-is, default `"info"`
    /// - `sort`: `bookmark` or `date`; unknown values fall back to date
    /// - `seed_samples`: `false`/`no`/`0` disable seeding, anything else enables it
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use daybook::{Config, SortMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("sort".to_string(), "bookmark".to_string());
    /// map.insert("seed_samples".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.sort_mode, SortMode::ByBookmark);
    /// assert!(!config.seed_samples);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let sort_mode = non_empty("sort")
            .map_or(Ok(SortMode::default()), |value| {
                value.parse::<SortMode>().map_err(DaybookError::Config)
            })
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "using default sort mode");
                SortMode::default()
            });

        let seed_samples = non_empty("seed_samples").map_or(true, |value| {
            !matches!(value.to_ascii_lowercase().as_str(), "false" | "no" | "0")
        });

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level").unwrap_or_else(|| "info".to_string()),
            sort_mode,
            seed_samples,
        }
    }

    /// Resolves the configured theme: file first, then name, then the default.
    ///
    /// Failures are logged and fall through to the next option.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            match Theme::from_file(infrastructure::expand_tilde(theme_file)) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file");
                }
            }
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Initializes the application state from configuration.
///
/// Creates an `AppState` with the resolved theme and sort mode, and a store holding
/// the sample entries (unless `seed_samples` is off). A malformed sample file is
/// logged and leaves the store empty.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    let _span = tracing::debug_span!("initialize").entered();

    let entries = if config.seed_samples {
        storage::sample_entries(chrono::Utc::now()).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to load sample entries");
            Vec::new()
        })
    } else {
        Vec::new()
    };

    tracing::debug!(entry_count = entries.len(), sort_mode = ?config.sort_mode, "initializing daybook");

    AppState::new(
        EntryStore::with_entries(entries),
        config.sort_mode,
        config.resolve_theme(),
    )
}
