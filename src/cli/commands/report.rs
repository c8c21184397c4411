//! Report command handler
//!
//! Gathers the planning grid, audit and overview for the active student and
//! renders them with the requested [`ReportFormat`].

use super::audit::{load_audit, load_overview};
use super::Session;
use degree_planner::config::Config;
use degree_planner::core::planner::PlanningGrid;
use degree_planner::core::report::{
    MarkdownReporter, ReportContext, ReportFormat, ReportGenerator, TextReporter,
};
use degree_planner::core::store::{RecordStore, StoreError};
use degree_planner::info;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command
pub fn run(config: &Config, output: Option<&Path>, format_str: &str, to_stdout: bool) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)?;
    let session = Session::open(config)?;
    let student = session.student.as_str();

    let load_err = |e: StoreError| format!("Failed to load records for {student}: {e}");
    let profile = session.store.profile(student).map_err(load_err)?;
    let completions = session.store.completions(student).map_err(load_err)?;
    let schedule = session.store.schedule(student).map_err(load_err)?;
    let catalog = session.store.catalog().map_err(load_err)?;

    let grid = PlanningGrid::build(
        &session.calendar,
        profile.as_ref(),
        &completions,
        &schedule,
        &catalog,
    );
    let audit = load_audit(&session, config, None)?;
    let overview = load_overview(&session, config, &audit)?;

    let ctx = ReportContext::new(
        student,
        session.calendar.current_semester(),
        session.calendar.today().to_string(),
        &grid,
        &audit,
        &overview,
    );

    let generator: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Text => Box::new(TextReporter::new()),
    };

    if to_stdout {
        let content = generator
            .render(&ctx)
            .map_err(|e| format!("Failed to render report: {e}"))?;
        print!("{content}");
        return Ok(());
    }

    let output_path = output.map_or_else(
        || default_output_path(config, student, format),
        Path::to_path_buf,
    );
    generator
        .generate(&ctx, &output_path)
        .map_err(|e| format!("Failed to write {}: {e}", output_path.display()))?;

    info!("Report written to {}", output_path.display());
    println!("✓ Report generated: {}", output_path.display());
    Ok(())
}

/// `<reports_dir>/<student>-plan.<ext>`, or the working directory when no
/// reports directory is configured
fn default_output_path(config: &Config, student: &str, format: ReportFormat) -> PathBuf {
    let dir = if config.paths.reports_dir.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&config.paths.reports_dir)
    };
    dir.join(format!("{student}-plan.{}", format.extension()))
}
