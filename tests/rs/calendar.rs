//! Integration tests for semester ordering, classification and enumeration

use chrono::NaiveDate;
use degree_planner::core::calendar::{
    self, compare, group_by_year_in_school, range, SemesterCalendar, SemesterStatus, MAX_RANGE_STEPS,
};
use degree_planner::core::models::{Semester, Term};
use std::cmp::Ordering;

fn on(y: i32, m: u32, d: u32) -> SemesterCalendar {
    SemesterCalendar::at(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn academic_year_ordering() {
    assert_eq!(compare("Fall 2024", "Spring 2025"), Ordering::Less);
    assert_eq!(compare("Spring 2025", "Summer 2025"), Ordering::Less);
    assert_eq!(compare("Summer 2025", "Fall 2025"), Ordering::Less);
    assert_eq!(compare("Fall 2025", "Fall 2025"), Ordering::Equal);
    assert_eq!(compare("Spring 2026", "Fall 2025"), Ordering::Greater);
}

#[test]
fn unparseable_labels_compare_equal() {
    assert_eq!(compare("garbage", "Fall 2025"), Ordering::Equal);
    assert_eq!(compare("Fall 2025", "Fall"), Ordering::Equal);
    assert_eq!(compare("Fall twenty", "Fall 2025"), Ordering::Equal);
}

#[test]
fn unknown_term_sorts_as_spring() {
    assert_eq!(compare("Winter 2025", "Spring 2025"), Ordering::Equal);
    assert_eq!(compare("Winter 2025", "Fall 2024"), Ordering::Greater);
    assert_eq!(compare("Winter 2025", "Summer 2025"), Ordering::Less);
}

#[test]
fn compare_agrees_with_semester_order() {
    let labels = ["Fall 2023", "Spring 2024", "Summer 2024", "Fall 2024", "Spring 2025"];
    for a in labels {
        for b in labels {
            let sa: Semester = a.parse().unwrap();
            let sb: Semester = b.parse().unwrap();
            assert_eq!(compare(a, b), sa.cmp(&sb), "{a} vs {b}");
        }
    }
}

#[test]
fn range_is_inclusive_and_ordered() {
    let labels = range("Fall 2024", "Fall 2025");
    assert_eq!(
        labels,
        vec!["Fall 2024", "Spring 2025", "Summer 2025", "Fall 2025"]
    );
    for pair in labels.windows(2) {
        assert_eq!(compare(&pair[0], &pair[1]), Ordering::Less);
    }
    assert_eq!(range("Spring 2025", "Spring 2025"), vec!["Spring 2025"]);
}

#[test]
fn range_across_years_and_empty_cases() {
    assert_eq!(
        range("Fall 2024", "Summer 2025"),
        vec!["Fall 2024", "Spring 2025", "Summer 2025"]
    );
    assert!(range("Spring 2025", "Fall 2024").is_empty());
    assert!(range("Fall 2025", "Fall 2024").is_empty());
    assert!(range("nonsense", "Fall 2024").is_empty());
    assert!(range("Fall 2024", "").is_empty());
}

#[test]
fn range_is_bounded() {
    let labels = range("Fall 2000", "Fall 2100");
    assert_eq!(labels.len(), MAX_RANGE_STEPS);
    assert_eq!(labels[0], "Fall 2000");
}

#[test]
fn range_labels_round_trip_through_parse() {
    for label in range("Summer 2019", "Spring 2023") {
        let parsed = calendar::parse_label(&label).and_then(|p| p.semester());
        assert_eq!(parsed.map(|s| s.to_string()), Some(label));
    }
}

#[test]
fn current_semester_by_month() {
    assert_eq!(on(2025, 1, 15).current_semester(), "Spring 2025");
    assert_eq!(on(2025, 4, 30).current_semester(), "Spring 2025");
    assert_eq!(on(2025, 5, 1).current_semester(), "Summer 2025");
    assert_eq!(on(2025, 8, 31).current_semester(), "Summer 2025");
    assert_eq!(on(2025, 9, 1).current_semester(), "Fall 2025");
    assert_eq!(on(2025, 12, 31).current_semester(), "Fall 2025");
}

#[test]
fn status_relative_to_today() {
    let cal = on(2025, 10, 15);
    assert_eq!(cal.status("Summer 2025"), SemesterStatus::Past);
    assert_eq!(cal.status("Fall 2025"), SemesterStatus::Current);
    assert_eq!(cal.status("Spring 2026"), SemesterStatus::Future);
    assert_eq!(cal.status("TBD"), SemesterStatus::Current);
    assert!(cal.is_past("Fall 2024"));
    assert!(!cal.is_past("TBD"));
}

#[test]
fn academic_year_of_today() {
    let cal = on(2026, 6, 1);
    assert_eq!(cal.current().term, Term::Summer);
    assert_eq!(cal.academic_year_label(), "2025-26");
    assert_eq!(
        cal.academic_year_semesters(),
        vec!["Fall 2025", "Spring 2026", "Summer 2026"]
    );
    assert_eq!(on(2099, 10, 1).academic_year_label(), "2099-00");
}

#[test]
fn year_in_school_groups() {
    let labels = range("Fall 2020", "Fall 2026");
    let groups = group_by_year_in_school(&labels);
    let names: Vec<_> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(
        names,
        vec!["Freshman", "Sophomore", "Pre-junior", "Junior", "Senior", "Year 6", "Year 7"]
    );
    assert_eq!(groups[6].semesters, vec!["Fall 2026"]);
}
