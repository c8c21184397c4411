//! Plan report generation
//!
//! Renders a student's planning grid, degree audit and progress overview
//! into a shareable document. Markdown output uses an embedded template;
//! plain text is meant for the terminal.

pub mod formats;

use crate::core::audit::AuditSummary;
use crate::core::planner::{PlanningGrid, ProgressOverview};
use std::error::Error;
use std::path::Path;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Everything a report renders, gathered in one place
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Student the report is for
    pub student: &'a str,
    /// Label of the semester containing the generation date
    pub current_semester: String,
    /// Date the report was generated, `YYYY-MM-DD`
    pub generated_on: String,
    /// Semester grid
    pub grid: &'a PlanningGrid,
    /// Degree audit
    pub audit: &'a AuditSummary,
    /// Dashboard figures
    pub overview: &'a ProgressOverview,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        student: &'a str,
        current_semester: String,
        generated_on: String,
        grid: &'a PlanningGrid,
        audit: &'a AuditSummary,
        overview: &'a ProgressOverview,
    ) -> Self {
        Self {
            student,
            current_semester,
            generated_on,
            grid,
            audit,
            overview,
        }
    }

    /// Remaining course codes joined for display, or "None"
    #[must_use]
    pub fn remaining_courses(&self) -> String {
        if self.audit.remaining_courses.is_empty() {
            "None".to_string()
        } else {
            self.audit.remaining_courses.join(", ")
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
