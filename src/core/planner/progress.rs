//! Dashboard figures for one student

use crate::core::audit::AuditSummary;
use crate::core::calendar::SemesterCalendar;
use crate::core::models::{CatalogCourse, CompletionRecord, ScheduleAssignment};
use std::collections::{HashMap, HashSet};

/// Default yearly credit target
pub const CREDITS_TARGET_PER_YEAR: f32 = 30.0;

/// Summary shown on the overview screen
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressOverview {
    /// e.g. `"2025-26"`
    pub academic_year: String,
    /// Fall, Spring and Summer labels of the current academic year
    pub academic_year_semesters: Vec<String>,
    /// Credits completed during the current academic year
    pub year_credits: f32,
    /// Credit target the year is measured against
    pub year_target: f32,
    /// `year_credits` as a rounded percentage of the target, at most 100
    pub year_percent: u32,
    /// Credits of every completion found in the catalog
    pub completed_credits: f32,
    /// Requirement completion rate from the audit
    pub completion_rate: u32,
    /// Scheduled courses in current or future semesters
    pub upcoming: Vec<ScheduleAssignment>,
}

impl ProgressOverview {
    /// Compute the overview. Completions missing from the catalog count
    /// zero credits.
    #[must_use]
    pub fn build(
        calendar: &SemesterCalendar,
        completions: &[CompletionRecord],
        schedule: &[ScheduleAssignment],
        catalog: &[CatalogCourse],
        audit: &AuditSummary,
        year_target: f32,
    ) -> Self {
        let credits: HashMap<&str, f32> = catalog
            .iter()
            .map(|c| (c.course_id.as_str(), c.credits))
            .collect();
        let credit_of = |code: &str| credits.get(code).copied().unwrap_or(0.0);

        let academic_year_semesters = calendar.academic_year_semesters();
        let this_year: HashSet<&str> = academic_year_semesters.iter().map(String::as_str).collect();

        let year_credits: f32 = completions
            .iter()
            .filter(|c| {
                c.semester_label
                    .as_deref()
                    .is_some_and(|s| this_year.contains(s))
            })
            .map(|c| credit_of(&c.course_code))
            .sum();
        let completed_credits: f32 = completions.iter().map(|c| credit_of(&c.course_code)).sum();

        let upcoming = schedule
            .iter()
            .filter(|s| !calendar.is_past(&s.semester_label))
            .cloned()
            .collect();

        Self {
            academic_year: calendar.academic_year_label(),
            academic_year_semesters,
            year_credits,
            year_target,
            year_percent: percent_of(year_credits, year_target),
            completed_credits,
            completion_rate: audit.completion_rate(),
            upcoming,
        }
    }
}

/// Rounded percentage of `value` against `target`, clamped to 0..=100
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_of(value: f32, target: f32) -> u32 {
    if target <= 0.0 {
        return 0;
    }
    (value / target * 100.0).round().clamp(0.0, 100.0) as u32
}
