//! Semester listing, planning grid and course placement commands

use super::Session;
use degree_planner::config::Config;
use degree_planner::core::calendar::{self, MAX_RANGE_STEPS};
use degree_planner::core::placement::{Ledger, PlacementPolicy};
use degree_planner::core::planner::{CourseEntry, PlanningGrid};
use degree_planner::core::store::{RecordStore, StoreError};
use degree_planner::{info, verbose, warn};

/// List semesters from `start` to `end`, or across the profile's window
pub fn run_semesters(config: &Config, start: Option<&str>, end: Option<&str>) -> Result<(), String> {
    let session = Session::open(config)?;
    let (start, end) = match (start, end) {
        (Some(s), Some(e)) => (s.to_string(), e.to_string()),
        _ => {
            let profile = session.profile()?;
            let Some((s, e)) = profile.planning_window() else {
                return Err("No planning window: pass START END or set the profile's freshman and graduation semesters".to_string());
            };
            (s.to_string(), e.to_string())
        }
    };

    let labels = calendar::range(&start, &end);
    if labels.is_empty() {
        warn!("No semesters between '{start}' and '{end}'");
        println!("No semesters between '{start}' and '{end}'.");
        return Ok(());
    }
    if labels.len() == MAX_RANGE_STEPS {
        verbose!("Range capped at {MAX_RANGE_STEPS} semesters");
    }

    for label in &labels {
        println!("{label:<12} {}", session.calendar.status(label).badge());
    }
    Ok(())
}

fn describe(course: &CourseEntry) -> String {
    match (&course.title, course.credits) {
        (Some(title), Some(credits)) => format!("{} {title} ({credits:.1} cr)", course.course_code),
        _ => course.course_code.clone(),
    }
}

/// Print the planning grid
pub fn run_plan(config: &Config) -> Result<(), String> {
    let session = Session::open(config)?;
    let student = session.student.as_str();
    let store = &session.store;
    let load_err = |e: StoreError| format!("Failed to load records for {student}: {e}");

    let profile = store.profile(student).map_err(load_err)?;
    let completions = store.completions(student).map_err(load_err)?;
    let schedule = store.schedule(student).map_err(load_err)?;
    let catalog = store.catalog().map_err(load_err)?;

    let grid = PlanningGrid::build(
        &session.calendar,
        profile.as_ref(),
        &completions,
        &schedule,
        &catalog,
    );

    if grid.needs_setup {
        println!("Set your freshman and graduation semesters first:");
        println!("  degreeplanner profile set --freshman \"Fall 2024\" --graduation \"Spring 2028\"");
        return Ok(());
    }

    println!("\n=== Plan for {student} (now: {}) ===", session.calendar.current_semester());
    for year in &grid.years {
        println!("\n{}", year.label);
        for cell in &year.semesters {
            println!("  {} [{}]", cell.label, cell.status.badge());
            for course in &cell.taken {
                println!("    ✓ {}", describe(course));
            }
            for course in &cell.scheduled {
                println!("    • {}", describe(course));
            }
        }
    }
    if !grid.unplaced.is_empty() {
        println!("\nUnknown semester");
        for course in &grid.unplaced {
            println!("    ✓ {}", describe(course));
        }
    }
    Ok(())
}

/// Place a course into a semester
pub fn run_add(config: &Config, course: &str, semester: &str) -> Result<(), String> {
    let course = course.trim();
    if course.is_empty() {
        return Err("Course code must not be blank".to_string());
    }
    let mut session = Session::open(config)?;
    let policy = PlacementPolicy::new(session.calendar);
    let ledger = policy
        .place(&mut session.store, &session.student, course, semester.trim())
        .map_err(|e| format!("Failed to place {course}: {e}"))?;

    info!("Placed {course} in {semester} ({ledger}) for {}", session.student);
    match ledger {
        Ledger::Completions => println!("✓ Recorded {course} as completed in {semester}"),
        Ledger::Schedule => println!("✓ Scheduled {course} for {semester}"),
    }
    Ok(())
}

/// Remove a course from the schedule
pub fn run_remove(config: &Config, course: &str) -> Result<(), String> {
    let mut session = Session::open(config)?;
    let removed = session
        .store
        .remove_scheduled(&session.student, course.trim())
        .map_err(|e| format!("Failed to remove {course}: {e}"))?;
    if removed {
        println!("✓ Removed {course} from the schedule");
    } else {
        println!("{course} is not on the schedule");
    }
    Ok(())
}
