//! End-to-end flows through the event handler, as the plugin shim drives them.

use chrono::{Duration, TimeZone, Utc};
use daybook::app::modes::{EditorField, InputMode, SearchFocus};
use daybook::{handle_event, initialize, AppState, Config, Entry, EntryStore, Event, SortMode, Theme};

fn empty_state() -> AppState {
    initialize(&Config {
        seed_samples: false,
        ..Config::default()
    })
}

fn apply(state: &mut AppState, events: &[Event]) {
    for event in events {
        handle_event(state, event).unwrap();
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_event(state, &Event::Char(c)).unwrap();
    }
}

#[test]
fn new_entry_cancelled_immediately_leaves_nothing_behind() {
    let mut state = empty_state();

    apply(&mut state, &[Event::NewEntry]);
    assert_eq!(state.input_mode(), InputMode::Editing(EditorField::Title));
    assert_eq!(state.store().len(), 1);

    apply(&mut state, &[Event::EditorCancel]);
    assert!(state.store().is_empty());
    assert_eq!(state.input_mode(), InputMode::Normal);

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.empty_state.unwrap().message, "Begin Your Journal");
}

#[test]
fn new_entry_with_title_survives_cancel() {
    let mut state = empty_state();

    apply(&mut state, &[Event::NewEntry]);
    type_text(&mut state, "Trip");
    apply(&mut state, &[Event::EditorCancel]);

    assert_eq!(state.store().len(), 1);
    let kept = state.store().entries()[0].clone();
    assert_eq!(kept.title, "Trip");
    assert!(!state.store().is_draft(kept.id()));

    // Once kept it is an ordinary entry: reopening and cancelling leaves it alone.
    apply(&mut state, &[Event::OpenSelected]);
    type_text(&mut state, " abroad");
    apply(&mut state, &[Event::EditorCancel]);

    assert_eq!(state.store().len(), 1);
    assert_eq!(state.store().entries()[0].title, "Trip");
}

#[test]
fn write_save_search_and_delete() {
    let mut state = empty_state();

    apply(&mut state, &[Event::NewEntry]);
    type_text(&mut state, "Trip");
    apply(&mut state, &[Event::EditorNewline]);
    type_text(&mut state, "Paris in spring");
    apply(&mut state, &[Event::EditorSave]);

    apply(&mut state, &[Event::NewEntry]);
    type_text(&mut state, "Work");
    apply(&mut state, &[Event::EditorNextField]);
    type_text(&mut state, "Deadline");
    apply(&mut state, &[Event::EditorSave]);

    assert_eq!(state.store().len(), 2);
    assert!(state.store().entries().iter().all(|e| !state.store().is_draft(e.id())));

    apply(&mut state, &[Event::SearchMode]);
    type_text(&mut state, "PAR");
    assert_eq!(state.input_mode(), InputMode::Search(SearchFocus::Typing));
    let visible = state.visible_entries();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Trip");

    apply(&mut state, &[Event::FocusResults, Event::RequestDelete]);
    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.dialog.unwrap().entry_title, "Trip");

    apply(&mut state, &[Event::ConfirmDelete]);
    assert_eq!(state.store().len(), 1);
    assert_eq!(state.input_mode(), InputMode::Search(SearchFocus::Navigating));

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.empty_state.unwrap().message, "No matching entries");

    apply(&mut state, &[Event::ExitSearch]);
    assert_eq!(state.visible_entries()[0].title, "Work");
}

#[test]
fn blank_body_cannot_be_saved() {
    let mut state = empty_state();

    apply(&mut state, &[Event::NewEntry]);
    type_text(&mut state, "Title only");
    apply(&mut state, &[Event::EditorSave]);

    assert!(state.editor.is_some());
    assert!(state.status.is_some());
    assert!(state.store().is_draft(state.store().entries()[0].id()));
}

#[test]
fn editing_keeps_bookmark_and_moves_entry_to_top() {
    let base = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
    let old = Entry::new("Old", "first")
        .touched(base)
        .bookmarked(true);
    let new = Entry::new("New", "second").touched(base + Duration::days(1));
    let mut state = AppState::new(
        EntryStore::with_entries(vec![old.clone(), new]),
        SortMode::ByDate,
        Theme::default(),
    );

    apply(&mut state, &[Event::KeyDown, Event::OpenSelected]);
    assert_eq!(state.editor.as_ref().unwrap().entry_id(), old.id());

    apply(&mut state, &[Event::EditorNextField]);
    type_text(&mut state, " again");
    apply(&mut state, &[Event::EditorSave]);

    let visible = state.visible_entries();
    assert_eq!(visible[0].id(), old.id());
    assert_eq!(visible[0].body, "first again");
    assert!(visible[0].is_bookmarked);
    assert_eq!(state.selected_index, 0);
}

#[test]
fn cycling_sort_follows_the_selected_entry() {
    let base = Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap();
    let bookmarked = Entry::new("Pinned", "").touched(base).bookmarked(true);
    let recent = Entry::new("Recent", "").touched(base + Duration::hours(5));
    let mut state = AppState::new(
        EntryStore::with_entries(vec![bookmarked.clone(), recent]),
        SortMode::ByDate,
        Theme::default(),
    );

    apply(&mut state, &[Event::KeyDown]);
    assert_eq!(state.selected_entry().unwrap().id(), bookmarked.id());

    apply(&mut state, &[Event::CycleSort]);
    assert_eq!(state.current_sort_mode(), SortMode::ByBookmark);
    assert_eq!(state.selected_index, 0);
    assert_eq!(state.selected_entry().unwrap().id(), bookmarked.id());

    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.header.sort_label, "Sort by Bookmark");
}

#[test]
fn seeded_journal_starts_with_samples() {
    let state = initialize(&Config::default());
    let vm = state.compute_viewmodel(30, 100);

    assert_eq!(vm.rows.len(), 3);
    assert_eq!(vm.rows[0].title, "My Birthday");
    assert!(vm.rows[0].is_bookmarked);
    assert!(vm.rows[0].is_selected);
    assert!(vm.empty_state.is_none());
}
