//! Per-student records: profile, completions and schedule

use super::Semester;
use serde::{Deserialize, Serialize};

/// Profile fields the planner reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// First semester of study (e.g., "Fall 2024")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freshman_semester: Option<String>,

    /// Planned graduation semester (e.g., "Spring 2028")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_semester: Option<String>,

    /// Major, used as the program code or name for the audit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

impl Profile {
    /// Both ends of the planning window, when set
    #[must_use]
    pub fn planning_window(&self) -> Option<(&str, &str)> {
        match (&self.freshman_semester, &self.graduation_semester) {
            (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
                Some((start.as_str(), end.as_str()))
            }
            _ => None,
        }
    }

    /// Whether the student has entered anything at all
    #[must_use]
    pub const fn has_dates(&self) -> bool {
        self.freshman_semester.is_some() || self.graduation_semester.is_some()
    }

    /// Set the first semester from user input; blank input clears it
    ///
    /// # Errors
    /// Returns an error if the input is not a `"<Term> <Year>"` label
    pub fn set_freshman_semester(&mut self, input: &str) -> Result<(), String> {
        self.freshman_semester = canonical_semester(input)?;
        Ok(())
    }

    /// Set the graduation semester from user input; blank input clears it
    ///
    /// # Errors
    /// Returns an error if the input is not a `"<Term> <Year>"` label
    pub fn set_graduation_semester(&mut self, input: &str) -> Result<(), String> {
        self.graduation_semester = canonical_semester(input)?;
        Ok(())
    }

    /// Set the major; blank input clears it
    pub fn set_major(&mut self, input: &str) {
        let major = input.trim();
        self.major = (!major.is_empty()).then(|| major.to_string());
    }
}

/// Validate a semester label strictly and render it as `"<Term> <Year>"`
fn canonical_semester(input: &str) -> Result<Option<String>, String> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    input.parse::<Semester>().map(|sem| Some(sem.to_string()))
}

/// A finished course. The semester may be unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Course code as stored (un-normalized)
    pub course_code: String,

    /// Semester the course was taken in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester_label: Option<String>,
}

impl CompletionRecord {
    /// Create a completion
    #[must_use]
    pub const fn new(course_code: String, semester_label: Option<String>) -> Self {
        Self {
            course_code,
            semester_label,
        }
    }
}

/// A course the student intends to take in a current or future semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAssignment {
    /// Course code as stored (un-normalized)
    pub course_code: String,

    /// Target semester
    pub semester_label: String,
}

impl ScheduleAssignment {
    /// Create a schedule assignment
    #[must_use]
    pub const fn new(course_code: String, semester_label: String) -> Self {
        Self {
            course_code,
            semester_label,
        }
    }
}
