//! Property tests for the audit invariant and semester enumeration

use degree_planner::core::audit::compute_audit;
use degree_planner::core::calendar::{compare, parse_label, range, MAX_RANGE_STEPS};
use degree_planner::core::models::{CompletionRecord, Requirement};
use proptest::prelude::*;
use std::cmp::Ordering;

fn course_code() -> impl Strategy<Value = String> {
    // Small alphabet so completions and requirements collide often
    proptest::string::string_regex("(cs|CS|Math|MATH) ?[0-9]{1,2}").unwrap()
}

fn requirement() -> impl Strategy<Value = Requirement> {
    prop_oneof![
        3 => course_code().prop_map(|code| Requirement::course(&code, "Course", 1)),
        1 => Just(Requirement::gen_ed("General Education", 1)),
        1 => course_code().prop_map(|label| Requirement {
            course_code: None,
            ..Requirement::course("", &label, 1)
        }),
    ]
}

fn completion() -> impl Strategy<Value = CompletionRecord> {
    (course_code(), proptest::option::of(Just("Fall 2024".to_string())))
        .prop_map(|(code, semester)| CompletionRecord::new(code, semester))
}

fn term() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("Fall"), Just("Spring"), Just("Summer")]
}

fn label() -> impl Strategy<Value = String> {
    (term(), any::<i32>()).prop_map(|(term, year)| format!("{term} {year}"))
}

/// Pairs less than 20 years apart, well inside the range cap
fn nearby_labels() -> impl Strategy<Value = (String, String)> {
    (term(), term(), -3000i32..3000, 0i32..20)
        .prop_map(|(a, b, year, span)| (format!("{a} {year}"), format!("{b} {}", year + span)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// Every requirement row is counted exactly once
    #[test]
    fn property_audit_partitions_requirements(
        reqs in proptest::collection::vec(requirement(), 0..24),
        done in proptest::collection::vec(completion(), 0..24),
    ) {
        let summary = compute_audit("CS", &reqs, &done);
        prop_assert_eq!(
            summary.completed_count + summary.remaining_courses.len() + summary.remaining_gen_ed_slots,
            reqs.len()
        );
        prop_assert_eq!(summary.total_requirements, reqs.len());
        prop_assert_eq!(
            summary.remaining_count,
            summary.remaining_courses.len() + summary.remaining_gen_ed_slots
        );
        let gen_ed_rows = reqs.iter().filter(|r| r.is_gen_ed_slot()).count();
        prop_assert_eq!(summary.remaining_gen_ed_slots, gen_ed_rows);
    }

    /// Output is bounded, strictly increasing and made of canonical labels
    #[test]
    fn property_range_bounded_and_round_trips(start in label(), end in label()) {
        let labels = range(&start, &end);
        prop_assert!(labels.len() <= MAX_RANGE_STEPS);
        if compare(&start, &end) == Ordering::Greater {
            prop_assert!(labels.is_empty());
        }
        for l in &labels {
            let reparsed = parse_label(l).and_then(|p| p.semester()).map(|s| s.to_string());
            prop_assert_eq!(reparsed.as_deref(), Some(l.as_str()));
        }
        for pair in labels.windows(2) {
            prop_assert_eq!(compare(&pair[0], &pair[1]), Ordering::Less);
        }
    }

    /// Short ranges are complete: they start and end on the given labels
    #[test]
    fn property_short_range_hits_both_ends((start, end) in nearby_labels()) {
        let labels = range(&start, &end);
        if compare(&start, &end) == Ordering::Greater {
            prop_assert!(labels.is_empty());
        } else {
            prop_assert_eq!(labels.first(), Some(&start));
            prop_assert_eq!(labels.last(), Some(&end));
        }
    }
}
