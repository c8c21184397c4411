//! Degree audit and overview commands

use super::Session;
use degree_planner::config::Config;
use degree_planner::core::audit::{effective_program_code, fetch_audit_summary, AuditSummary};
use degree_planner::core::planner::{ProgressOverview, CREDITS_TARGET_PER_YEAR};
use degree_planner::core::store::{RecordStore, StoreError};
use degree_planner::verbose;

/// Program to audit: explicit argument, then profile major, then config
fn resolve_program(session: &Session, config: &Config, requested: Option<&str>) -> Result<String, String> {
    let profile = session.profile()?;
    let fallback = profile
        .major
        .as_deref()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(config.planner.default_program.as_str());
    Ok(effective_program_code(requested, fallback).to_string())
}

pub(super) fn load_audit(session: &Session, config: &Config, requested: Option<&str>) -> Result<AuditSummary, String> {
    let program = resolve_program(session, config, requested)?;
    verbose!("Auditing {} against {program}", session.student);
    fetch_audit_summary(&session.store, &session.student, &program)
        .map_err(|e| format!("Audit failed for {}: {e}", session.student))
}

/// Print the audit summary
pub fn run_audit(config: &Config, program: Option<&str>) -> Result<(), String> {
    let session = Session::open(config)?;
    let summary = load_audit(&session, config, program)?;

    println!("\n=== Degree Audit: {} ({}) ===\n", session.student, summary.program_code);
    if !summary.has_requirements() {
        println!("No requirements configured for program '{}'.", summary.program_code);
        return Ok(());
    }
    println!(
        "Completed:  {}/{} ({}%)",
        summary.completed_count,
        summary.total_requirements,
        summary.completion_rate()
    );
    println!("Remaining:  {}", summary.remaining_count);
    if summary.remaining_courses.is_empty() {
        println!("Courses:    none");
    } else {
        println!("Courses:    {}", summary.remaining_courses.join(", "));
    }
    println!("Gen-ed:     {} slot(s) open", summary.remaining_gen_ed_slots);
    Ok(())
}

pub(super) fn load_overview(
    session: &Session,
    config: &Config,
    audit: &AuditSummary,
) -> Result<ProgressOverview, String> {
    let student = session.student.as_str();
    let load_err = |e: StoreError| format!("Failed to load records for {student}: {e}");
    let completions = session.store.completions(student).map_err(load_err)?;
    let schedule = session.store.schedule(student).map_err(load_err)?;
    let catalog = session.store.catalog().map_err(load_err)?;

    let target = if config.planner.credits_per_year > 0.0 {
        config.planner.credits_per_year
    } else {
        CREDITS_TARGET_PER_YEAR
    };
    Ok(ProgressOverview::build(
        &session.calendar,
        &completions,
        &schedule,
        &catalog,
        audit,
        target,
    ))
}

/// Print the dashboard figures
pub fn run_overview(config: &Config) -> Result<(), String> {
    let session = Session::open(config)?;
    let audit = load_audit(&session, config, None)?;
    let overview = load_overview(&session, config, &audit)?;

    println!("\n=== Overview: {} ===\n", session.student);
    println!(
        "Academic year {} ({})",
        overview.academic_year,
        overview.academic_year_semesters.join(", ")
    );
    println!(
        "Year credits:      {:.1} / {:.0} ({}%)",
        overview.year_credits, overview.year_target, overview.year_percent
    );
    println!("Completed credits: {:.1}", overview.completed_credits);
    println!(
        "Degree progress:   {}% of {} requirements",
        overview.completion_rate, audit.program_code
    );
    println!("Upcoming courses:  {}", overview.upcoming.len());
    for entry in &overview.upcoming {
        println!("  • {} ({})", entry.course_code, entry.semester_label);
    }
    Ok(())
}
