//! Behavioural properties of the entry store, delete workflow and list projection,
//! exercised through the public API.

use chrono::{DateTime, Duration, TimeZone, Utc};
use daybook::domain::{DaybookError, Entry, EntryId, SortMode};
use daybook::storage::{project, DeletePhase, EntryStore, SaveOutcome, StoreChange};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 22, 9, 0, 0).unwrap()
}

fn titles(entries: &[Entry]) -> Vec<String> {
    entries.iter().map(|e| e.title.clone()).collect()
}

#[test]
fn ids_never_collide_across_drafts_and_saves() {
    let mut store = EntryStore::new();
    let mut drafts = Vec::new();

    for i in 0..20 {
        let draft = store.create_draft();
        if i % 3 == 0 {
            store.save(draft.with_text(format!("entry {i}"), "body"));
        }
        if i % 5 == 0 {
            store.save(Entry::new("loose", "entry"));
        }
        drafts.push(draft);
    }
    store.save(drafts[4].with_text("resaved", ""));

    let ids: HashSet<EntryId> = store.entries().iter().map(Entry::id).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn saving_twice_only_refreshes_the_timestamp() {
    let mut store = EntryStore::new();
    let entry = Entry::new("Trip", "Paris").bookmarked(true);

    assert_eq!(store.save_at(entry.clone(), base_time()), SaveOutcome::Inserted);
    let first = store.entries().to_vec();

    let later = base_time() + Duration::minutes(5);
    assert_eq!(store.save_at(entry, later), SaveOutcome::Updated);
    let second = store.entries().to_vec();

    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].id(), second[0].id());
    assert_eq!(first[0].title, second[0].title);
    assert_eq!(first[0].body, second[0].body);
    assert_eq!(first[0].is_bookmarked, second[0].is_bookmarked);
    assert_eq!(second[0].touched_at, later);
}

#[test]
fn filter_matches_title_or_body() {
    let entries = vec![Entry::new("Trip", "Paris"), Entry::new("Work", "Deadline")];

    assert_eq!(titles(&project(&entries, SortMode::ByDate, "par")), vec!["Trip"]);
    assert_eq!(project(&entries, SortMode::ByDate, "").len(), 2);
}

#[test]
fn sort_orders_match_the_two_modes() {
    let a = Entry::new("A", "").touched(base_time()).bookmarked(true);
    let b = Entry::new("B", "").touched(base_time() + Duration::hours(1));
    let c = Entry::new("C", "")
        .touched(base_time() + Duration::hours(2))
        .bookmarked(true);
    let store = EntryStore::with_entries(vec![a, b, c]);

    let by_bookmark = project(store.entries(), SortMode::ByBookmark, "");
    assert_eq!(titles(&by_bookmark), vec!["C", "A", "B"]);

    let by_date = project(store.entries(), SortMode::ByDate, "");
    assert_eq!(titles(&by_date), vec!["C", "B", "A"]);

    let d = Entry::new("D", "").touched(base_time() - Duration::hours(1));
    let with_older = [store.entries(), std::slice::from_ref(&d)].concat();
    let by_bookmark = project(&with_older, SortMode::ByBookmark, "");
    assert_eq!(titles(&by_bookmark), vec!["C", "A", "B", "D"]);

    // Projection leaves the canonical order alone.
    assert_eq!(titles(store.entries()), vec!["A", "B", "C"]);
}

#[test]
fn cancel_keeps_and_confirm_removes() {
    let x = Entry::new("X", "");
    let mut store = EntryStore::with_entries(vec![x.clone()]);

    store.request_delete(x.id());
    assert_eq!(store.delete_phase(), DeletePhase::PendingConfirmation(x.id()));
    assert_eq!(store.cancel_delete(), Some(x.id()));
    assert!(store.contains(x.id()));
    assert_eq!(store.pending_delete(), None);

    store.request_delete(x.id());
    let removed = store.confirm_delete().unwrap();
    assert_eq!(removed.map(|e| e.id()), Some(x.id()));
    assert!(!store.contains(x.id()));
    assert_eq!(store.pending_delete(), None);

    assert!(store.confirm_delete().unwrap().is_none());
    assert!(store.is_empty());
}

#[test]
fn later_request_replaces_the_pending_candidate() {
    let x = Entry::new("X", "");
    let y = Entry::new("Y", "");
    let mut store = EntryStore::with_entries(vec![x.clone(), y.clone()]);

    store.request_delete(x.id());
    store.request_delete(y.id());
    store.confirm_delete().unwrap();

    assert!(store.contains(x.id()));
    assert!(!store.contains(y.id()));
}

#[test]
fn stale_candidate_reports_not_found_and_clears_slot() {
    let mut store = EntryStore::with_entries(vec![Entry::new("kept", "")]);
    let ghost = EntryId::new();

    store.request_delete(ghost);
    assert!(matches!(store.confirm_delete(), Err(DaybookError::NotFound(id)) if id == ghost));
    assert_eq!(store.delete_phase(), DeletePhase::Idle);
    assert_eq!(store.len(), 1);
}

#[test]
fn blank_draft_is_discarded_but_filled_draft_is_kept() {
    let mut store = EntryStore::new();

    let blank = store.create_draft();
    assert!(store.discard_if_blank_draft(&blank.with_text("  ", "\n")));
    assert!(!store.contains(blank.id()));

    let titled = store.create_draft();
    assert!(!store.discard_if_blank_draft(&titled.with_text("Kept", "")));
    assert!(store.contains(titled.id()));
}

#[test]
fn subscribers_see_the_whole_delete_sequence() {
    let x = Entry::new("X", "");
    let mut store = EntryStore::with_entries(vec![x.clone()]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = store.subscribe(move |change| sink.borrow_mut().push(*change));

    store.request_delete(x.id());
    store.confirm_delete().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![
            StoreChange::PendingDelete(Some(x.id())),
            StoreChange::Removed(x.id()),
            StoreChange::PendingDelete(None),
        ]
    );

    assert!(store.unsubscribe(subscription));
    store.create_draft();
    assert_eq!(seen.borrow().len(), 3);
}
