//! Integration smoke tests for `degree_planner`

use degree_planner::core::calendar::SemesterCalendar;
use degree_planner::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn current_semester_is_a_valid_label() {
    let label = SemesterCalendar::now().current_semester();
    assert!(label.parse::<degree_planner::core::models::Semester>().is_ok());
}
