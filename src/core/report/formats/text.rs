//! Plain-text report for terminal output

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Plain-text report generator
#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, self.render(ctx)?)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let audit = ctx.audit;
        let mut out = String::new();

        writeln!(out, "Degree plan for {}", ctx.student)?;
        writeln!(
            out,
            "Program {}: {}/{} requirements complete ({}%)",
            audit.program_code,
            audit.completed_count,
            audit.total_requirements,
            audit.completion_rate()
        )?;
        writeln!(out, "Remaining: {}", ctx.remaining_courses())?;
        writeln!(out, "Open gen-ed slots: {}", audit.remaining_gen_ed_slots)?;
        writeln!(out)?;

        if ctx.grid.needs_setup {
            writeln!(out, "Profile incomplete: set freshman and graduation semesters.")?;
            return Ok(out);
        }

        for year in &ctx.grid.years {
            writeln!(out, "{}", year.label)?;
            for cell in &year.semesters {
                let taken: Vec<&str> = cell.taken.iter().map(|c| c.course_code.as_str()).collect();
                let planned: Vec<&str> = cell.scheduled.iter().map(|c| c.course_code.as_str()).collect();
                writeln!(out, "  {:<12} [{}]", cell.label, cell.status.badge())?;
                if !taken.is_empty() {
                    writeln!(out, "    taken:     {}", taken.join(", "))?;
                }
                if !planned.is_empty() {
                    writeln!(out, "    scheduled: {}", planned.join(", "))?;
                }
            }
        }

        if !ctx.grid.unplaced.is_empty() {
            let codes: Vec<&str> = ctx.grid.unplaced.iter().map(|c| c.course_code.as_str()).collect();
            writeln!(out, "Unknown semester")?;
            writeln!(out, "    taken:     {}", codes.join(", "))?;
        }
        Ok(out)
    }
}
