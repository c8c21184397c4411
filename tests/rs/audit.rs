//! Integration tests for the degree audit over a record store

use degree_planner::core::audit::{fetch_audit_summary, AuditSummary};
use degree_planner::core::models::{
    CatalogCourse, CompletionRecord, Profile, Program, Requirement, ScheduleAssignment,
};
use degree_planner::core::store::{MemoryStore, RecordStore, StoreError, StoreResult};

fn cs_program() -> Program {
    let mut program = Program::new("p-cs".to_string(), "CS".to_string(), "Computer Science".to_string());
    program.add_requirement(Requirement::gen_ed("Humanities", 4));
    program.add_requirement(Requirement::course("CS 2011", "Data Structures", 2));
    program.add_requirement(Requirement::course("CS 1100", "Intro to Programming", 1));
    program.add_requirement(Requirement::gen_ed("General Education", 5));
    program.add_requirement(Requirement::course("MATH 1061", "Calculus I", 3));
    program
}

fn store_with_program() -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add_program(cs_program());
    store
}

fn assert_invariant(s: &AuditSummary) {
    assert_eq!(
        s.completed_count + s.remaining_courses.len() + s.remaining_gen_ed_slots,
        s.total_requirements
    );
}

#[test]
fn audit_by_code() {
    let mut store = store_with_program();
    store.upsert_completion("s1", "cs1100", Some("Fall 2024")).unwrap();
    store.upsert_completion("s1", "MATH1061", None).unwrap();

    let summary = fetch_audit_summary(&store, "s1", "CS").unwrap();
    assert_eq!(summary.program_code, "CS");
    assert_eq!(summary.total_requirements, 5);
    assert_eq!(summary.completed_count, 2);
    assert_eq!(summary.remaining_courses, vec!["CS2011"]);
    assert_eq!(summary.remaining_gen_ed_slots, 2);
    assert_eq!(summary.remaining_count, 3);
    assert_invariant(&summary);
}

#[test]
fn remaining_follow_sequence_order() {
    let store = store_with_program();
    let summary = fetch_audit_summary(&store, "nobody", "CS").unwrap();
    assert_eq!(summary.remaining_courses, vec!["CS1100", "CS2011", "MATH1061"]);
    assert_eq!(summary.completed_count, 0);
    assert_invariant(&summary);
}

#[test]
fn audit_by_name_fallback() {
    let store = store_with_program();
    let summary = fetch_audit_summary(&store, "s1", " computer science ").unwrap();
    assert_eq!(summary.program_code, "CS");
    assert_eq!(summary.total_requirements, 5);
}

#[test]
fn unknown_program_is_empty_not_error() {
    let store = store_with_program();
    let summary = fetch_audit_summary(&store, "s1", "ART").unwrap();
    assert_eq!(summary, AuditSummary::empty("ART"));
    assert!(!summary.has_requirements());
}

#[test]
fn blank_program_code_audits_default_program() {
    let mut store = store_with_program();
    store.upsert_completion("s1", "CS 1100", Some("Fall 2024")).unwrap();

    for blank in ["", "   ", "\t"] {
        let summary = fetch_audit_summary(&store, "s1", blank).unwrap();
        assert_eq!(summary.program_code, "CS");
        assert_eq!(summary.total_requirements, 5);
        assert_eq!(summary.completed_count, 1);
    }
}

#[test]
fn blank_program_code_never_matches_nameless_program() {
    let mut store = MemoryStore::new();
    let mut nameless = Program::new("p-xx".to_string(), "XX".to_string(), String::new());
    nameless.add_requirement(Requirement::course("XX 1000", "Placeholder", 1));
    store.add_program(nameless);

    let summary = fetch_audit_summary(&store, "s1", "").unwrap();
    assert_eq!(summary, AuditSummary::empty("CS"));
    assert!(store.program_by_name("").unwrap().is_none());
}

#[test]
fn gen_ed_completion_never_fills_slot() {
    let mut store = store_with_program();
    store
        .upsert_completion("s1", "General Education", Some("Fall 2024"))
        .unwrap();
    let summary = fetch_audit_summary(&store, "s1", "CS").unwrap();
    assert_eq!(summary.remaining_gen_ed_slots, 2);
    assert_eq!(summary.completed_count, 0);
}

#[test]
fn schedule_does_not_count_as_completed() {
    let mut store = store_with_program();
    store.upsert_schedule("s1", "CS 2011", "Spring 2026").unwrap();
    let summary = fetch_audit_summary(&store, "s1", "CS").unwrap();
    assert!(summary.remaining_courses.contains(&"CS2011".to_string()));
}

/// Store whose every read fails
struct BrokenStore;

fn refused<T>() -> StoreResult<T> {
    Err(StoreError::Rejected {
        message: "connection lost".to_string(),
    })
}

impl RecordStore for BrokenStore {
    fn program_by_code(&self, _code: &str) -> StoreResult<Option<Program>> {
        Ok(Some(cs_program()))
    }
    fn program_by_name(&self, _name: &str) -> StoreResult<Option<Program>> {
        refused()
    }
    fn requirements(&self, _program_id: &str) -> StoreResult<Vec<Requirement>> {
        Ok(cs_program().ordered_requirements())
    }
    fn completions(&self, _student: &str) -> StoreResult<Vec<CompletionRecord>> {
        refused()
    }
    fn schedule(&self, _student: &str) -> StoreResult<Vec<ScheduleAssignment>> {
        refused()
    }
    fn profile(&self, _student: &str) -> StoreResult<Option<Profile>> {
        refused()
    }
    fn catalog(&self) -> StoreResult<Vec<CatalogCourse>> {
        refused()
    }
    fn upsert_completion(&mut self, _: &str, _: &str, _: Option<&str>) -> StoreResult<()> {
        refused()
    }
    fn upsert_schedule(&mut self, _: &str, _: &str, _: &str) -> StoreResult<()> {
        refused()
    }
    fn remove_scheduled(&mut self, _: &str, _: &str) -> StoreResult<bool> {
        refused()
    }
    fn save_profile(&mut self, _: &str, _: Profile) -> StoreResult<()> {
        refused()
    }
    fn import_catalog(&mut self, _: Vec<CatalogCourse>) -> StoreResult<usize> {
        refused()
    }
}

#[test]
fn store_failure_propagates() {
    let err = fetch_audit_summary(&BrokenStore, "s1", "CS").unwrap_err();
    assert!(matches!(err, StoreError::Rejected { .. }));
    assert!(err.to_string().contains("connection lost"));
}
