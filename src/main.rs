//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Daybook library and the
//! Zellij plugin system. It implements `ZellijPlugin` to handle Zellij events and
//! lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` events and for store change notifications
//! 3. **Update**: Map keys to events by input mode, delegate to `handle_event`
//! 4. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Open the selected entry
//! - `n`: New entry
//! - `b`: Toggle bookmark
//! - `d`/`Delete`: Delete (asks for confirmation)
//! - `s`: Switch sort mode
//! - `/`: Search
//! - `q`/`Esc`: Close plugin
//!
//! Search mode, typing:
//! - Characters edit the query, `Enter` moves to results, `Esc` exits search
//! - `Ctrl+n`/`Ctrl+p`, `Down`/`Up`: Move selection
//!
//! Search mode, navigating results:
//! - Normal-mode keys, plus `/` to edit the query and `Esc` to exit search
//!
//! Editor:
//! - Characters type into the focused field, `Tab` switches fields
//! - `Enter` moves from title to body, or breaks a body line
//! - `Ctrl+s`: Save, `Esc`: Cancel (blank new entries are discarded)
//!
//! Delete confirmation:
//! - `y`/`Enter`: Delete, `n`/`Esc`: Keep

#![allow(clippy::multiple_crate_versions)]

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use zellij_tile::prelude::*;

use daybook::app::modes::{InputMode, SearchFocus};
use daybook::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the Zellij-side store subscription.
struct State {
    /// Core application state from library layer.
    app: daybook::AppState,

    /// Set by the store subscription whenever the entry collection changes.
    store_dirty: Rc<Cell<bool>>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: daybook::initialize(&Config::default()),
            store_dirty: Rc::new(Cell::new(false)),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes logging and application state, and
    /// subscribes to key events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        daybook::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = daybook::initialize(&config);

        let dirty = Rc::clone(&self.store_dirty);
        let subscription = self.app.store_mut().subscribe(move |change| {
            tracing::trace!(change = ?change, "store changed");
            dirty.set(true);
        });
        tracing::debug!(subscription = ?subscription, "watching store changes");

        subscribe(&[EventType::Key]);

        tracing::info!(entry_count = self.app.store().len(), "daybook loaded");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the handler asked for a render or the store changed.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };

        let _guard = tracing::debug_span!("plugin_update", key = ?key.bare_key).entered();

        let Some(our_event) = self.map_key_event(&key) else {
            return false;
        };

        let should_render = match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                self.app.status = Some(e.to_string());
                true
            }
        };

        self.store_dirty.replace(false) || should_render
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        daybook::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard events to application events according to the input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        match self.app.input_mode() {
            InputMode::ConfirmDelete => Self::map_confirm_key(key),
            InputMode::Editing(_) => Self::map_editor_key(key, ctrl),
            InputMode::Search(SearchFocus::Typing) => Self::map_search_key(key, ctrl),
            InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
                BareKey::Esc => Some(Event::ExitSearch),
                BareKey::Char('/') => Some(Event::FocusSearchBar),
                _ => Self::map_list_key(key, ctrl),
            },
            InputMode::Normal => match key.bare_key {
                BareKey::Esc => Some(Event::Escape),
                BareKey::Char('/') => Some(Event::SearchMode),
                _ => Self::map_list_key(key, ctrl),
            },
        }
    }

    /// Keys shared by normal mode and search result navigation.
    fn map_list_key(key: &KeyWithModifier, ctrl: bool) -> Option<Event> {
        if ctrl {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('n') => Event::NewEntry,
            BareKey::Char('b') => Event::ToggleBookmark,
            BareKey::Char('d') | BareKey::Delete => Event::RequestDelete,
            BareKey::Char('s') => Event::CycleSort,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    fn map_search_key(key: &KeyWithModifier, ctrl: bool) -> Option<Event> {
        if ctrl {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Esc => Event::ExitSearch,
            BareKey::Enter => Event::FocusResults,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_editor_key(key: &KeyWithModifier, ctrl: bool) -> Option<Event> {
        if ctrl {
            return (key.bare_key == BareKey::Char('s')).then_some(Event::EditorSave);
        }

        Some(match key.bare_key {
            BareKey::Esc => Event::EditorCancel,
            BareKey::Tab => Event::EditorNextField,
            BareKey::Enter => Event::EditorNewline,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_confirm_key(key: &KeyWithModifier) -> Option<Event> {
        match key.bare_key {
            BareKey::Char('y' | 'Y') | BareKey::Enter => Some(Event::ConfirmDelete),
            BareKey::Char('n' | 'N') | BareKey::Esc => Some(Event::CancelDelete),
            _ => None,
        }
    }

    /// Executes an action returned from event handling.
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
