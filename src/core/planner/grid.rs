//! Planning grid: the student's semesters laid out by year of school with
//! the courses taken or scheduled in each.

use crate::core::calendar::{self, SemesterCalendar, SemesterStatus};
use crate::core::models::{CatalogCourse, CompletionRecord, Profile, ScheduleAssignment};
use std::collections::HashMap;

/// Bucket used for completions recorded without a semester
pub const UNKNOWN_SEMESTER: &str = "Unknown";

/// A course shown inside a semester cell
#[derive(Debug, Clone, PartialEq)]
pub struct CourseEntry {
    /// Course code as stored
    pub course_code: String,
    /// Title from the catalog, when the course is listed
    pub title: Option<String>,
    /// Credits from the catalog, when the course is listed
    pub credits: Option<f32>,
}

impl CourseEntry {
    fn lookup(course_code: &str, catalog: &HashMap<&str, &CatalogCourse>) -> Self {
        let course = catalog.get(course_code);
        Self {
            course_code: course_code.to_string(),
            title: course.map(|c| c.title.clone()),
            credits: course.map(|c| c.credits),
        }
    }
}

/// One semester of the grid
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterCell {
    /// Semester label
    pub label: String,
    /// Position relative to the current semester
    pub status: SemesterStatus,
    /// Completions recorded for this semester
    pub taken: Vec<CourseEntry>,
    /// Schedule entries for this semester; always empty for past semesters
    pub scheduled: Vec<CourseEntry>,
}

/// A year of school (up to three cells)
#[derive(Debug, Clone, PartialEq)]
pub struct YearRow {
    /// "Freshman", "Sophomore", ...
    pub label: String,
    /// Cells in chronological order
    pub semesters: Vec<SemesterCell>,
}

/// The whole grid
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanningGrid {
    /// True when the profile lacks a freshman or graduation semester
    pub needs_setup: bool,
    /// Rows by year of school
    pub years: Vec<YearRow>,
    /// Completions with no semester, shown apart from the grid
    pub unplaced: Vec<CourseEntry>,
}

impl PlanningGrid {
    /// Every cell in order
    pub fn cells(&self) -> impl Iterator<Item = &SemesterCell> {
        self.years.iter().flat_map(|y| y.semesters.iter())
    }

    /// Build the grid for one student.
    ///
    /// Without both profile dates the grid is empty with `needs_setup` set.
    /// A window whose bounds fail to parse or are reversed yields no rows.
    #[must_use]
    pub fn build(
        calendar: &SemesterCalendar,
        profile: Option<&Profile>,
        completions: &[CompletionRecord],
        schedule: &[ScheduleAssignment],
        catalog: &[CatalogCourse],
    ) -> Self {
        let Some((start, end)) = profile.and_then(Profile::planning_window) else {
            return Self {
                needs_setup: true,
                ..Self::default()
            };
        };

        let by_id: HashMap<&str, &CatalogCourse> =
            catalog.iter().map(|c| (c.course_id.as_str(), c)).collect();

        let mut taken: HashMap<&str, Vec<CourseEntry>> = HashMap::new();
        for row in completions {
            let sem = row.semester_label.as_deref().unwrap_or(UNKNOWN_SEMESTER);
            taken
                .entry(sem)
                .or_default()
                .push(CourseEntry::lookup(&row.course_code, &by_id));
        }

        let mut scheduled: HashMap<&str, Vec<CourseEntry>> = HashMap::new();
        for row in schedule {
            scheduled
                .entry(row.semester_label.as_str())
                .or_default()
                .push(CourseEntry::lookup(&row.course_code, &by_id));
        }

        let labels = calendar::range(start, end);
        let years = calendar::group_by_year_in_school(&labels)
            .into_iter()
            .map(|year| YearRow {
                label: year.label,
                semesters: year
                    .semesters
                    .into_iter()
                    .map(|label| {
                        let status = calendar.status(&label);
                        let taken = taken.remove(label.as_str()).unwrap_or_default();
                        let scheduled = if status.is_past() {
                            Vec::new()
                        } else {
                            scheduled.remove(label.as_str()).unwrap_or_default()
                        };
                        SemesterCell {
                            label,
                            status,
                            taken,
                            scheduled,
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            needs_setup: false,
            years,
            unplaced: taken.remove(UNKNOWN_SEMESTER).unwrap_or_default(),
        }
    }
}
