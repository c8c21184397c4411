//! Semester calendar: parsing, ordering, classification and enumeration of
//! semester labels.
//!
//! Labels are free text of the form `"<Term> <Year>"`. Every function here
//! tolerates dirty labels: parsing returns `None`, comparison treats an
//! unparseable side as equal and enumeration returns an empty list.
//!
//! Internally a label maps to an [`AcademicState`] `(y, t)` where Fall of
//! calendar year Y opens academic year Y and Spring/Summer of Y belong to
//! academic year Y-1. Ordering and grouping both reduce to integer
//! arithmetic on that pair.

use crate::core::models::{AcademicState, Semester, Term};
use chrono::{Datelike, Local, NaiveDate};
use std::cmp::Ordering;
use std::fmt;

/// Upper bound on the number of labels [`range`] will produce
pub const MAX_RANGE_STEPS: usize = 80;

/// Names given to consecutive three-semester groups of a plan
pub const YEAR_IN_SCHOOL_LABELS: [&str; 5] =
    ["Freshman", "Sophomore", "Pre-junior", "Junior", "Senior"];

/// A label split into its term token and year, before the term is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLabel<'a> {
    /// First whitespace-separated token, verbatim
    pub term: &'a str,
    /// Second token as an integer
    pub year: i32,
}

impl ParsedLabel<'_> {
    /// The validated semester, if the term token is a known term name
    #[must_use]
    pub fn semester(&self) -> Option<Semester> {
        Term::from_name(self.term).map(|term| Semester::new(term, self.year))
    }
}

/// Split a label into term and year.
///
/// Requires at least two whitespace-separated tokens and an integer second
/// token; extra tokens are ignored. Returns `None` on anything else.
#[must_use]
pub fn parse_label(label: &str) -> Option<ParsedLabel<'_>> {
    let mut parts = label.split_whitespace();
    let term = parts.next()?;
    let year = parts.next()?.parse::<i32>().ok()?;
    Some(ParsedLabel { term, year })
}

/// Comparison key for a label.
///
/// An unrecognized term name takes Spring's offset, so `"Winter 2025"` sorts
/// as `"Spring 2025"`.
#[must_use]
pub fn academic_state(label: &str) -> Option<AcademicState> {
    let parsed = parse_label(label)?;
    let state = match Term::from_name(parsed.term) {
        Some(term) => Semester::new(term, parsed.year).academic_state(),
        None => AcademicState {
            year: i64::from(parsed.year) - 1,
            index: Term::Spring.index(),
        },
    };
    Some(state)
}

/// Chronological comparison of two labels.
///
/// Returns `Ordering::Equal` when either label fails to parse, so callers
/// must not rely on a total order over dirty data.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    match (academic_state(a), academic_state(b)) {
        (Some(sa), Some(sb)) => sa.cmp(&sb),
        _ => Ordering::Equal,
    }
}

/// Every semester label from `start` to `end` inclusive, in order.
///
/// Empty if either bound fails to parse or `start` comes after `end`.
/// Never yields more than [`MAX_RANGE_STEPS`] labels.
#[must_use]
pub fn range(start: &str, end: &str) -> Vec<String> {
    let (Some(mut state), Some(last)) = (academic_state(start), academic_state(end)) else {
        return Vec::new();
    };
    if state > last {
        return Vec::new();
    }

    let mut out = Vec::new();
    for _ in 0..MAX_RANGE_STEPS {
        if state > last {
            break;
        }
        if let Some(sem) = Semester::from_state(state) {
            out.push(sem.to_string());
        }
        state = state.next();
    }
    out
}

/// Academic-year label such as `"2025-26"` for the year opened by the Fall
/// of `start_year`
#[must_use]
pub fn academic_year_label_for(start_year: i64) -> String {
    let end = start_year + 1;
    format!("{start_year}-{:02}", end.rem_euclid(100))
}

/// The three semesters of the academic year opened by the Fall of
/// `start_year`, in Fall → Spring → Summer order
#[must_use]
pub fn academic_year_semesters_for(start_year: i64) -> Vec<Semester> {
    Term::ALL
        .iter()
        .filter_map(|term| {
            Semester::from_state(AcademicState {
                year: start_year,
                index: term.index(),
            })
        })
        .collect()
}

/// Position of a semester relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemesterStatus {
    /// Before the current semester
    Past,
    /// The current semester
    Current,
    /// After the current semester
    Future,
}

impl SemesterStatus {
    /// Short badge shown next to a semester in the planning grid
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Past => "Done",
            Self::Current => "Active",
            Self::Future => "Plan",
        }
    }

    /// Whether courses placed here count as history rather than intent
    #[must_use]
    pub const fn is_past(self) -> bool {
        matches!(self, Self::Past)
    }
}

impl fmt::Display for SemesterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Past => "past",
            Self::Current => "current",
            Self::Future => "future",
        };
        f.write_str(s)
    }
}

/// A group of consecutive semesters shown as one year of school
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearInSchool {
    /// "Freshman", "Sophomore", ... then "Year 6", "Year 7"
    pub label: String,
    /// Up to three semester labels
    pub semesters: Vec<String>,
}

/// Chunk an enumerated plan into years of school, three semesters each
#[must_use]
pub fn group_by_year_in_school(semesters: &[String]) -> Vec<YearInSchool> {
    semesters
        .chunks(3)
        .enumerate()
        .map(|(i, chunk)| YearInSchool {
            label: YEAR_IN_SCHOOL_LABELS
                .get(i)
                .map_or_else(|| format!("Year {}", i + 1), |s| (*s).to_string()),
            semesters: chunk.to_vec(),
        })
        .collect()
}

/// Date-dependent calendar operations, anchored at a fixed "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterCalendar {
    today: NaiveDate,
}

impl SemesterCalendar {
    /// Calendar anchored at the local wall-clock date
    #[must_use]
    pub fn now() -> Self {
        Self::at(Local::now().date_naive())
    }

    /// Calendar anchored at `today`
    #[must_use]
    pub const fn at(today: NaiveDate) -> Self {
        Self { today }
    }

    /// The anchor date
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Semester containing today: September–December is Fall, May–August is
    /// Summer and January–April is Spring, all of the current calendar year
    #[must_use]
    pub fn current(&self) -> Semester {
        let year = self.today.year();
        let term = match self.today.month() {
            9..=12 => Term::Fall,
            5..=8 => Term::Summer,
            _ => Term::Spring,
        };
        Semester::new(term, year)
    }

    /// Label of [`SemesterCalendar::current`]
    #[must_use]
    pub fn current_semester(&self) -> String {
        self.current().to_string()
    }

    /// Classify a label against the current semester. Unparseable labels
    /// compare equal and therefore read as `Current`.
    #[must_use]
    pub fn status(&self, label: &str) -> SemesterStatus {
        match compare(label, &self.current_semester()) {
            Ordering::Less => SemesterStatus::Past,
            Ordering::Equal => SemesterStatus::Current,
            Ordering::Greater => SemesterStatus::Future,
        }
    }

    /// Whether a label lies before the current semester
    #[must_use]
    pub fn is_past(&self, label: &str) -> bool {
        self.status(label).is_past()
    }

    /// Label of the academic year containing the current semester, e.g. "2025-26"
    #[must_use]
    pub fn academic_year_label(&self) -> String {
        academic_year_label_for(self.current().academic_year_start())
    }

    /// Fall, Spring and Summer labels of the current academic year
    #[must_use]
    pub fn academic_year_semesters(&self) -> Vec<String> {
        academic_year_semesters_for(self.current().academic_year_start())
            .into_iter()
            .map(|sem| sem.to_string())
            .collect()
    }
}

impl Default for SemesterCalendar {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(y: i32, m: u32, d: u32) -> SemesterCalendar {
        SemesterCalendar::at(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(
            parse_label("Fall 2024"),
            Some(ParsedLabel { term: "Fall", year: 2024 })
        );
        assert_eq!(
            parse_label("  Spring\t2025 extra"),
            Some(ParsedLabel { term: "Spring", year: 2025 })
        );
        assert_eq!(parse_label("Fall"), None);
        assert_eq!(parse_label(""), None);
        assert_eq!(parse_label("Fall year"), None);
    }

    #[test]
    fn test_parsed_label_semester() {
        assert_eq!(
            parse_label("Summer 2025").and_then(|p| p.semester()),
            Some(Semester::new(Term::Summer, 2025))
        );
        assert_eq!(parse_label("Winter 2025").and_then(|p| p.semester()), None);
    }

    #[test]
    fn test_unknown_term_uses_spring_offset() {
        assert_eq!(academic_state("Winter 2025"), academic_state("Spring 2025"));
        assert_eq!(compare("Winter 2025", "Spring 2025"), Ordering::Equal);
        assert_eq!(compare("Fall 2024", "Winter 2025"), Ordering::Less);
    }

    #[test]
    fn test_compare_ordering() {
        assert_eq!(compare("Fall 2024", "Spring 2025"), Ordering::Less);
        assert_eq!(compare("Spring 2025", "Summer 2025"), Ordering::Less);
        assert_eq!(compare("Summer 2025", "Fall 2025"), Ordering::Less);
        assert_eq!(compare("Fall 2025", "Fall 2025"), Ordering::Equal);
        assert_eq!(compare("Spring 2026", "Fall 2025"), Ordering::Greater);
    }

    #[test]
    fn test_compare_malformed_is_equal() {
        assert_eq!(compare("garbage", "Fall 2025"), Ordering::Equal);
        assert_eq!(compare("Fall 2025", ""), Ordering::Equal);
    }

    #[test]
    fn test_current_semester_by_month() {
        assert_eq!(on(2025, 1, 15).current_semester(), "Spring 2025");
        assert_eq!(on(2025, 4, 30).current_semester(), "Spring 2025");
        assert_eq!(on(2025, 5, 1).current_semester(), "Summer 2025");
        assert_eq!(on(2025, 8, 31).current_semester(), "Summer 2025");
        assert_eq!(on(2025, 9, 1).current_semester(), "Fall 2025");
        assert_eq!(on(2025, 12, 31).current_semester(), "Fall 2025");
    }

    #[test]
    fn test_status() {
        let cal = on(2025, 10, 1);
        assert_eq!(cal.status("Spring 2025"), SemesterStatus::Past);
        assert_eq!(cal.status("Fall 2025"), SemesterStatus::Current);
        assert_eq!(cal.status("Spring 2026"), SemesterStatus::Future);
        assert_eq!(cal.status("not a label"), SemesterStatus::Current);
        assert!(cal.is_past("Summer 2025"));
    }

    #[test]
    fn test_academic_year_label() {
        assert_eq!(on(2025, 10, 1).academic_year_label(), "2025-26");
        assert_eq!(on(2026, 2, 1).academic_year_label(), "2025-26");
        assert_eq!(on(2026, 6, 1).academic_year_label(), "2025-26");
        assert_eq!(academic_year_label_for(1999), "1999-00");
    }

    #[test]
    fn test_academic_year_semesters() {
        let expected = vec!["Fall 2025", "Spring 2026", "Summer 2026"];
        assert_eq!(on(2025, 9, 2).academic_year_semesters(), expected);
        assert_eq!(on(2026, 3, 2).academic_year_semesters(), expected);
        assert_eq!(on(2026, 7, 2).academic_year_semesters(), expected);
    }

    #[test]
    fn test_range_basic() {
        assert_eq!(
            range("Fall 2024", "Summer 2025"),
            vec!["Fall 2024", "Spring 2025", "Summer 2025"]
        );
        assert_eq!(range("Spring 2025", "Spring 2025"), vec!["Spring 2025"]);
        assert!(range("Spring 2025", "Fall 2024").is_empty());
        assert!(range("bad", "Fall 2024").is_empty());
    }

    #[test]
    fn test_range_with_unknown_term_bound() {
        // "Winter" sorts as Spring and renders as Spring
        assert_eq!(range("Winter 2025", "Summer 2025"), vec!["Spring 2025", "Summer 2025"]);
    }

    #[test]
    fn test_range_is_capped() {
        let labels = range("Fall 1000", "Fall 9000");
        assert_eq!(labels.len(), MAX_RANGE_STEPS);
        assert_eq!(labels[0], "Fall 1000");

        let huge = range(&format!("Fall {}", i32::MIN + 1), &format!("Fall {}", i32::MAX - 1));
        assert_eq!(huge.len(), MAX_RANGE_STEPS);
    }

    #[test]
    fn test_group_by_year_in_school() {
        let labels = range("Fall 2024", "Fall 2030");
        let groups = group_by_year_in_school(&labels);
        assert_eq!(groups.len(), 7);
        assert_eq!(groups[0].label, "Freshman");
        assert_eq!(groups[0].semesters, vec!["Fall 2024", "Spring 2025", "Summer 2025"]);
        assert_eq!(groups[2].label, "Pre-junior");
        assert_eq!(groups[4].label, "Senior");
        assert_eq!(groups[5].label, "Year 6");
        assert_eq!(groups[6].semesters, vec!["Fall 2030"]);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(SemesterStatus::Past.badge(), "Done");
        assert_eq!(SemesterStatus::Current.badge(), "Active");
        assert_eq!(SemesterStatus::Future.badge(), "Plan");
        assert_eq!(SemesterStatus::Future.to_string(), "future");
    }
}
