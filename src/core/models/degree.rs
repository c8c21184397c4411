//! Degree program and requirement models

use serde::{Deserialize, Serialize};

/// Requirement type that marks a general-education slot
pub const GEN_ED_TYPE: &str = "gen_ed";

/// Requirement type for a specific course
pub const COURSE_TYPE: &str = "course";

/// Label that marks a general-education slot regardless of type
pub const GEN_ED_LABEL: &str = "General Education";

/// One line item of a degree program's requirement list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// `"course"`, `"gen_ed"` or any other type the store supplies
    pub requirement_type: String,

    /// Structured course code, when the row carries one (e.g., "CS 2011")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,

    /// Human-readable name
    #[serde(default)]
    pub label: String,

    /// Display order within the program
    #[serde(default)]
    pub sequence: i32,
}

impl Requirement {
    /// A specific-course requirement
    #[must_use]
    pub fn course(code: &str, label: &str, sequence: i32) -> Self {
        Self {
            requirement_type: COURSE_TYPE.to_string(),
            course_code: Some(code.to_string()),
            label: label.to_string(),
            sequence,
        }
    }

    /// A general-education slot
    #[must_use]
    pub fn gen_ed(label: &str, sequence: i32) -> Self {
        Self {
            requirement_type: GEN_ED_TYPE.to_string(),
            course_code: None,
            label: label.to_string(),
            sequence,
        }
    }

    /// Whether this row is a fungible gen-ed slot that no specific course
    /// completion can satisfy
    #[must_use]
    pub fn is_gen_ed_slot(&self) -> bool {
        self.requirement_type == GEN_ED_TYPE || self.label == GEN_ED_LABEL
    }
}

/// A degree program with its requirement list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Store identifier
    pub id: String,

    /// Short program code (e.g., "CS")
    pub code: String,

    /// Program name (e.g., "Computer Science")
    #[serde(default)]
    pub name: String,

    /// Requirement rows; not necessarily sorted
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

impl Program {
    /// Create a program with no requirements
    #[must_use]
    pub const fn new(id: String, code: String, name: String) -> Self {
        Self {
            id,
            code,
            name,
            requirements: Vec::new(),
        }
    }

    /// Append a requirement row
    pub fn add_requirement(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    /// Requirement rows ordered by `sequence` (stable for equal sequences)
    #[must_use]
    pub fn ordered_requirements(&self) -> Vec<Requirement> {
        let mut reqs = self.requirements.clone();
        reqs.sort_by_key(|r| r.sequence);
        reqs
    }
}
