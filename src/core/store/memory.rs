//! In-memory record store with keyed upsert semantics

use super::{RecordStore, StoreResult};
use crate::core::models::{CatalogCourse, CompletionRecord, Profile, Program, Requirement, ScheduleAssignment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serializable snapshot of everything a store holds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Degree programs with their requirement rows
    #[serde(default)]
    pub programs: Vec<Program>,

    /// Course catalog
    #[serde(default)]
    pub catalog: Vec<CatalogCourse>,

    /// Per-student records keyed by student id
    #[serde(default)]
    pub students: BTreeMap<String, StudentRecords>,
}

/// Serializable records of one student
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecords {
    /// Profile, if the student saved one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    /// Completions ledger
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,

    /// Schedule ledger
    #[serde(default)]
    pub schedule: Vec<ScheduleAssignment>,
}

/// Ledgers of one student, keyed by course code so that a course appears at
/// most once per ledger
#[derive(Debug, Clone, Default)]
struct StudentIndex {
    profile: Option<Profile>,
    completions: BTreeMap<String, Option<String>>,
    schedule: BTreeMap<String, String>,
}

/// Record store held entirely in memory.
///
/// Writing the same (student, course) twice to a ledger overwrites the
/// semester: last write wins.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    programs: Vec<Program>,
    catalog: BTreeMap<String, CatalogCourse>,
    students: BTreeMap<String, StudentIndex>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot. Duplicate ledger rows collapse to the
    /// last one.
    #[must_use]
    pub fn from_dataset(dataset: Dataset) -> Self {
        let catalog = dataset
            .catalog
            .into_iter()
            .map(|c| (c.course_id.clone(), c))
            .collect();
        let students = dataset
            .students
            .into_iter()
            .map(|(id, records)| {
                let index = StudentIndex {
                    profile: records.profile,
                    completions: records
                        .completions
                        .into_iter()
                        .map(|c| (c.course_code, c.semester_label))
                        .collect(),
                    schedule: records
                        .schedule
                        .into_iter()
                        .map(|s| (s.course_code, s.semester_label))
                        .collect(),
                };
                (id, index)
            })
            .collect();
        Self {
            programs: dataset.programs,
            catalog,
            students,
        }
    }

    /// Snapshot the store for persistence
    #[must_use]
    pub fn to_dataset(&self) -> Dataset {
        let students = self
            .students
            .iter()
            .map(|(id, index)| {
                let records = StudentRecords {
                    profile: index.profile.clone(),
                    completions: index
                        .completions
                        .iter()
                        .map(|(code, sem)| CompletionRecord::new(code.clone(), sem.clone()))
                        .collect(),
                    schedule: index
                        .schedule
                        .iter()
                        .map(|(code, sem)| ScheduleAssignment::new(code.clone(), sem.clone()))
                        .collect(),
                };
                (id.clone(), records)
            })
            .collect();
        Dataset {
            programs: self.programs.clone(),
            catalog: self.catalog.values().cloned().collect(),
            students,
        }
    }

    /// Add or replace a program (keyed by id)
    pub fn add_program(&mut self, program: Program) {
        if let Some(existing) = self.programs.iter_mut().find(|p| p.id == program.id) {
            *existing = program;
        } else {
            self.programs.push(program);
        }
    }

    fn student_mut(&mut self, student: &str) -> &mut StudentIndex {
        self.students.entry(student.to_string()).or_default()
    }
}

impl RecordStore for MemoryStore {
    fn program_by_code(&self, code: &str) -> StoreResult<Option<Program>> {
        Ok(self.programs.iter().find(|p| p.code == code).cloned())
    }

    fn program_by_name(&self, name: &str) -> StoreResult<Option<Program>> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return Ok(None);
        }
        Ok(self
            .programs
            .iter()
            .find(|p| p.name.to_lowercase() == wanted)
            .cloned())
    }

    fn requirements(&self, program_id: &str) -> StoreResult<Vec<Requirement>> {
        Ok(self
            .programs
            .iter()
            .find(|p| p.id == program_id)
            .map(Program::ordered_requirements)
            .unwrap_or_default())
    }

    fn completions(&self, student: &str) -> StoreResult<Vec<CompletionRecord>> {
        Ok(self.students.get(student).map_or_else(Vec::new, |s| {
            s.completions
                .iter()
                .map(|(code, sem)| CompletionRecord::new(code.clone(), sem.clone()))
                .collect()
        }))
    }

    fn schedule(&self, student: &str) -> StoreResult<Vec<ScheduleAssignment>> {
        Ok(self.students.get(student).map_or_else(Vec::new, |s| {
            s.schedule
                .iter()
                .map(|(code, sem)| ScheduleAssignment::new(code.clone(), sem.clone()))
                .collect()
        }))
    }

    fn profile(&self, student: &str) -> StoreResult<Option<Profile>> {
        Ok(self.students.get(student).and_then(|s| s.profile.clone()))
    }

    fn catalog(&self) -> StoreResult<Vec<CatalogCourse>> {
        Ok(self.catalog.values().cloned().collect())
    }

    fn upsert_completion(
        &mut self,
        student: &str,
        course_code: &str,
        semester_label: Option<&str>,
    ) -> StoreResult<()> {
        self.student_mut(student)
            .completions
            .insert(course_code.to_string(), semester_label.map(str::to_string));
        Ok(())
    }

    fn upsert_schedule(&mut self, student: &str, course_code: &str, semester_label: &str) -> StoreResult<()> {
        self.student_mut(student)
            .schedule
            .insert(course_code.to_string(), semester_label.to_string());
        Ok(())
    }

    fn remove_scheduled(&mut self, student: &str, course_code: &str) -> StoreResult<bool> {
        Ok(self
            .students
            .get_mut(student)
            .is_some_and(|s| s.schedule.remove(course_code).is_some()))
    }

    fn save_profile(&mut self, student: &str, profile: Profile) -> StoreResult<()> {
        self.student_mut(student).profile = Some(profile);
        Ok(())
    }

    fn import_catalog(&mut self, courses: Vec<CatalogCourse>) -> StoreResult<usize> {
        let count = courses.len();
        for course in courses {
            self.catalog.insert(course.course_id.clone(), course);
        }
        Ok(count)
    }
}
