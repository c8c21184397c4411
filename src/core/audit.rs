//! Degree audit: reconcile a program's requirement list against a student's
//! completions.
//!
//! General-education rows are fungible slots that this audit never matches
//! against a specific course; they always count as remaining. Every other
//! row is matched by normalized course code, falling back to the normalized
//! label for rows that carry no code.

use crate::core::models::{CompletionRecord, Requirement};
use crate::core::store::{RecordStore, StoreResult};
use crate::{debug, info};
use serde::Serialize;
use std::collections::HashSet;

/// Program code used when the caller supplies a blank one
pub const DEFAULT_PROGRAM_CODE: &str = "CS";

/// Progress of one student against one program
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    /// Code of the resolved program, or the requested code if none matched
    pub program_code: String,
    /// Number of requirement rows
    pub total_requirements: usize,
    /// Rows matched by a completion
    pub completed_count: usize,
    /// `remaining_courses.len() + remaining_gen_ed_slots`
    pub remaining_count: usize,
    /// Normalized codes of unmatched course rows, in program order
    pub remaining_courses: Vec<String>,
    /// Gen-ed slots still open
    pub remaining_gen_ed_slots: usize,
}

impl AuditSummary {
    /// Zero-valued summary for a program with no configured requirements
    #[must_use]
    pub fn empty(program_code: &str) -> Self {
        Self {
            program_code: program_code.to_string(),
            ..Self::default()
        }
    }

    /// Whether the program has any requirements at all
    #[must_use]
    pub const fn has_requirements(&self) -> bool {
        self.total_requirements > 0
    }

    /// Completed rows as a rounded percentage of all rows; 0 when there are none
    #[must_use]
    pub fn completion_rate(&self) -> u32 {
        if self.total_requirements == 0 {
            return 0;
        }
        let pct = (self.completed_count * 100 + self.total_requirements / 2) / self.total_requirements;
        u32::try_from(pct).unwrap_or(100)
    }
}

/// Canonical form used for every course-code comparison: whitespace removed,
/// uppercased. `"cs 2028c"` becomes `"CS2028C"`.
#[must_use]
pub fn normalize_course_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Run the audit over already-loaded data.
///
/// `requirements` must already be in program order; the order only affects
/// `remaining_courses`.
#[must_use]
pub fn compute_audit(
    program_code: &str,
    requirements: &[Requirement],
    completions: &[CompletionRecord],
) -> AuditSummary {
    let taken: HashSet<String> = completions
        .iter()
        .map(|c| normalize_course_code(&c.course_code))
        .collect();

    let mut completed_count = 0;
    let mut remaining_courses = Vec::new();
    let mut remaining_gen_ed_slots = 0;

    for req in requirements {
        if req.is_gen_ed_slot() {
            remaining_gen_ed_slots += 1;
            continue;
        }
        let key = req
            .course_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .map_or_else(|| normalize_course_code(&req.label), normalize_course_code);
        if taken.contains(&key) {
            completed_count += 1;
        } else {
            remaining_courses.push(key);
        }
    }

    AuditSummary {
        program_code: program_code.to_string(),
        total_requirements: requirements.len(),
        completed_count,
        remaining_count: remaining_courses.len() + remaining_gen_ed_slots,
        remaining_courses,
        remaining_gen_ed_slots,
    }
}

/// Trimmed program code, or the trimmed `fallback` when blank, or
/// [`DEFAULT_PROGRAM_CODE`] when both are blank
#[must_use]
pub fn effective_program_code<'a>(requested: Option<&'a str>, fallback: &'a str) -> &'a str {
    requested
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| Some(fallback.trim()).filter(|s| !s.is_empty()))
        .unwrap_or(DEFAULT_PROGRAM_CODE)
}

/// Load a program's requirements and a student's completions from `store`
/// and audit them.
///
/// A blank `program_code` means [`DEFAULT_PROGRAM_CODE`]. The program is
/// looked up by exact code, then by case-insensitive name. If neither matches, the result is [`AuditSummary::empty`] rather than an
/// error. Store failures are returned as errors.
///
/// # Errors
/// Returns the store's error if any lookup fails
pub fn fetch_audit_summary<S: RecordStore + ?Sized>(
    store: &S,
    student: &str,
    program_code: &str,
) -> StoreResult<AuditSummary> {
    let code = effective_program_code(Some(program_code), DEFAULT_PROGRAM_CODE);

    let program = match store.program_by_code(code)? {
        Some(program) => Some(program),
        None => {
            debug!("No program with code '{code}', trying name match");
            store.program_by_name(code)?
        }
    };
    let Some(program) = program else {
        info!("No degree program configured for '{code}'");
        return Ok(AuditSummary::empty(code));
    };

    let requirements = store.requirements(&program.id)?;
    let completions = store.completions(student)?;
    let summary = compute_audit(&program.code, &requirements, &completions);
    debug!(
        "Audit for {student} in {}: {}/{} complete, {} gen-ed slot(s) open",
        summary.program_code,
        summary.completed_count,
        summary.total_requirements,
        summary.remaining_gen_ed_slots
    );
    Ok(summary)
}
