//! Integration tests for the placement policy against both store backends

use chrono::NaiveDate;
use degree_planner::core::calendar::SemesterCalendar;
use degree_planner::core::placement::{Ledger, PlacementPolicy};
use degree_planner::core::store::{FileStore, MemoryStore, RecordStore};
use tempfile::TempDir;

fn fall_2025() -> PlacementPolicy {
    PlacementPolicy::new(SemesterCalendar::at(
        NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
    ))
}

#[test]
fn past_semester_records_completion() {
    let mut store = MemoryStore::new();
    let ledger = fall_2025()
        .place(&mut store, "s1", "CS 1100", "Fall 2024")
        .unwrap();

    assert_eq!(ledger, Ledger::Completions);
    let completions = store.completions("s1").unwrap();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].course_code, "CS 1100");
    assert_eq!(completions[0].semester_label.as_deref(), Some("Fall 2024"));
    assert!(store.schedule("s1").unwrap().is_empty());
}

#[test]
fn current_and_future_semesters_schedule() {
    let mut store = MemoryStore::new();
    let policy = fall_2025();

    assert_eq!(
        policy.place(&mut store, "s1", "CS2011", "Fall 2025").unwrap(),
        Ledger::Schedule
    );
    assert_eq!(
        policy.place(&mut store, "s1", "CS3003", "Summer 2026").unwrap(),
        Ledger::Schedule
    );
    assert_eq!(store.schedule("s1").unwrap().len(), 2);
    assert!(store.completions("s1").unwrap().is_empty());
}

#[test]
fn malformed_label_goes_to_schedule() {
    let mut store = MemoryStore::new();
    let ledger = fall_2025().place(&mut store, "s1", "CS2011", "someday").unwrap();
    assert_eq!(ledger, Ledger::Schedule);
    assert_eq!(store.schedule("s1").unwrap()[0].semester_label, "someday");
}

#[test]
fn replacing_overwrites_semester() {
    let mut store = MemoryStore::new();
    let policy = fall_2025();
    policy.place(&mut store, "s1", "CS2011", "Spring 2026").unwrap();
    policy.place(&mut store, "s1", "CS2011", "Fall 2026").unwrap();

    let schedule = store.schedule("s1").unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].semester_label, "Fall 2026");
}

#[test]
fn students_are_isolated() {
    let mut store = MemoryStore::new();
    fall_2025().place(&mut store, "s1", "CS2011", "Spring 2026").unwrap();
    assert!(store.schedule("s2").unwrap().is_empty());
}

#[test]
fn placement_persists_through_file_store() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("planner.toml");
    let policy = fall_2025();

    {
        let mut store = FileStore::open(&path).unwrap();
        policy.place(&mut store, "s1", "CS1100", "Spring 2025").unwrap();
        policy.place(&mut store, "s1", "CS2011", "Spring 2026").unwrap();
    }

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.completions("s1").unwrap().len(), 1);
    assert_eq!(reopened.schedule("s1").unwrap().len(), 1);
}
