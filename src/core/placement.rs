//! Course placement policy
//!
//! Decides, from calendar position alone, whether adding a course to a
//! semester records history (completions ledger) or intent (schedule
//! ledger), then performs exactly one keyed upsert into that ledger.
//!
//! Nothing is moved between ledgers: a schedule entry whose semester has
//! since become past stays in the schedule, and re-placing a course into a
//! past semester does not remove its schedule entry.

use crate::core::calendar::SemesterCalendar;
use crate::core::store::{RecordStore, StoreResult};
use crate::debug;
use std::fmt;

/// The two per-student record sets a placement can write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ledger {
    /// Courses already finished
    Completions,
    /// Courses planned for the current or a future semester
    Schedule,
}

impl fmt::Display for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completions => write!(f, "completions"),
            Self::Schedule => write!(f, "schedule"),
        }
    }
}

/// Routes enrollment actions using a calendar's notion of "now"
#[derive(Debug, Clone, Copy)]
pub struct PlacementPolicy {
    calendar: SemesterCalendar,
}

impl PlacementPolicy {
    /// Create a policy over `calendar`
    #[must_use]
    pub const fn new(calendar: SemesterCalendar) -> Self {
        Self { calendar }
    }

    /// The calendar this policy classifies against
    #[must_use]
    pub const fn calendar(&self) -> &SemesterCalendar {
        &self.calendar
    }

    /// Ledger a course placed in `semester_label` belongs to. Past semesters
    /// go to completions; current, future and unparseable labels go to the
    /// schedule.
    #[must_use]
    pub fn ledger_for(&self, semester_label: &str) -> Ledger {
        if self.calendar.is_past(semester_label) {
            Ledger::Completions
        } else {
            Ledger::Schedule
        }
    }

    /// Place `course_code` into `semester_label` for `student`.
    ///
    /// Performs one upsert keyed by (student, course code); an existing entry
    /// in the chosen ledger has its semester overwritten. Returns the ledger
    /// that was written.
    ///
    /// # Errors
    /// Returns the store's error if the write fails
    pub fn place<S: RecordStore + ?Sized>(
        &self,
        store: &mut S,
        student: &str,
        course_code: &str,
        semester_label: &str,
    ) -> StoreResult<Ledger> {
        let ledger = self.ledger_for(semester_label);
        debug!(
            "Placing {course_code} in {semester_label} for {student}: {ledger} (current {})",
            self.calendar.current_semester()
        );
        match ledger {
            Ledger::Completions => store.upsert_completion(student, course_code, Some(semester_label))?,
            Ledger::Schedule => store.upsert_schedule(student, course_code, semester_label)?,
        }
        Ok(ledger)
    }
}
