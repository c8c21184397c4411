//! Integration tests for the file-backed store and catalog import

use degree_planner::core::models::{Profile, Program, Requirement};
use degree_planner::core::store::{read_catalog_csv, FileStore, RecordStore, StoreError};
use std::fs;
use tempfile::TempDir;

fn temp_path(dir: &TempDir, name: &str) -> std::path::PathBuf {
    dir.path().join(name)
}

#[test]
fn missing_file_opens_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileStore::open(temp_path(&dir, "absent.toml")).unwrap();
    assert!(store.catalog().unwrap().is_empty());
    assert!(store.profile("s1").unwrap().is_none());
    assert!(!store.path().exists());
}

#[test]
fn writes_survive_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_path(&dir, "nested/planner.toml");

    {
        let mut store = FileStore::open(&path).unwrap();
        let mut program = Program::new("p1".to_string(), "CS".to_string(), "Computer Science".to_string());
        program.add_requirement(Requirement::course("CS 1100", "Intro", 1));
        store.add_program(program).unwrap();

        let mut profile = Profile::default();
        profile.set_freshman_semester("Fall 2024").unwrap();
        profile.set_graduation_semester("Spring 2028").unwrap();
        store.save_profile("s1", profile).unwrap();

        store.upsert_completion("s1", "CS 1100", Some("Fall 2024")).unwrap();
        store.upsert_schedule("s1", "CS 2011", "Spring 2026").unwrap();
        store.upsert_schedule("s1", "CS 3003", "Fall 2026").unwrap();
        assert!(store.remove_scheduled("s1", "CS 3003").unwrap());
        assert!(!store.remove_scheduled("s1", "CS 3003").unwrap());
    }

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.program_by_code("CS").unwrap().map(|p| p.id), Some("p1".to_string()));
    assert_eq!(store.requirements("p1").unwrap().len(), 1);
    assert_eq!(
        store.profile("s1").unwrap().and_then(|p| p.freshman_semester),
        Some("Fall 2024".to_string())
    );
    assert_eq!(store.completions("s1").unwrap().len(), 1);
    let schedule = store.schedule("s1").unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].course_code, "CS 2011");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_path(&dir, "broken.toml");
    fs::write(&path, "programs = \"not a list\"").unwrap();
    assert!(matches!(FileStore::open(&path), Err(StoreError::Parse(_))));
}

#[test]
fn catalog_import_from_csv() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let csv = temp_path(&dir, "catalog.csv");
    fs::write(
        &csv,
        "Course ID,Subject,Title,Credits\n\
         CS1100,Computer Science,Intro to Programming,3\n\
         CS2011,Computer Science,\"Data Structures, Lab\",4\n\
         MATH1061,Mathematics,Calculus I,4\n",
    )
    .unwrap();

    let mut store = FileStore::open(temp_path(&dir, "planner.toml")).unwrap();
    let courses = read_catalog_csv(&csv).unwrap();
    assert_eq!(store.import_catalog(courses).unwrap(), 3);

    // Re-import overwrites by id instead of duplicating
    let again = read_catalog_csv(&csv).unwrap();
    store.import_catalog(again).unwrap();

    let reopened = FileStore::open(store.path()).unwrap();
    let catalog = reopened.catalog().unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog[1].title, "Data Structures, Lab");
}

#[test]
fn missing_csv_is_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = read_catalog_csv(temp_path(&dir, "nope.csv")).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn failed_write_leaves_no_trace() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_path(&dir, "planner.toml");
    let mut store = FileStore::open(&path).unwrap();
    store.upsert_schedule("s1", "CS 2011", "Spring 2026").unwrap();

    // A directory in place of the data file makes every write fail
    fs::remove_file(&path).unwrap();
    fs::create_dir(&path).unwrap();

    let err = store.upsert_schedule("s1", "CS 1100", "Fall 2026").unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
    assert!(store.upsert_completion("s1", "CS 1100", Some("Fall 2024")).is_err());
    assert!(store.save_profile("s1", Profile::default()).is_err());
    assert!(store.remove_scheduled("s1", "CS 2011").is_err());

    let schedule = store.schedule("s1").unwrap();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].course_code, "CS 2011");
    assert!(store.completions("s1").unwrap().is_empty());
    assert!(store.profile("s1").unwrap().is_none());
}
