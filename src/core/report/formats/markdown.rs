//! Markdown report generator
//!
//! Fills the embedded plan template. Output renders in GitHub, GitLab and
//! most editors.

use crate::core::planner::CourseEntry;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/plan.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let audit = ctx.audit;
        let overview = ctx.overview;

        let substitutions = [
            ("student", ctx.student.to_string()),
            ("program_code", audit.program_code.clone()),
            ("current_semester", ctx.current_semester.clone()),
            ("academic_year", overview.academic_year.clone()),
            ("generated_on", ctx.generated_on.clone()),
            ("completed_count", audit.completed_count.to_string()),
            ("total_requirements", audit.total_requirements.to_string()),
            ("completion_rate", audit.completion_rate().to_string()),
            ("remaining_courses", ctx.remaining_courses()),
            ("remaining_gen_ed_slots", audit.remaining_gen_ed_slots.to_string()),
            ("year_credits", format!("{:.1}", overview.year_credits)),
            ("year_target", format!("{:.0}", overview.year_target)),
            ("year_percent", overview.year_percent.to_string()),
            ("completed_credits", format!("{:.1}", overview.completed_credits)),
            ("semester_grid", Self::grid_table(ctx)),
            ("upcoming", Self::upcoming_list(ctx)),
        ];

        fill_placeholders(MARKDOWN_TEMPLATE, &substitutions)
    }

    fn course_cell(courses: &[CourseEntry]) -> String {
        if courses.is_empty() {
            return "-".to_string();
        }
        courses
            .iter()
            .map(|c| match &c.title {
                Some(title) if !title.is_empty() => format!("{} ({title})", c.course_code),
                _ => c.course_code.clone(),
            })
            .collect::<Vec<_>>()
            .join("<br>")
    }

    fn grid_table(ctx: &ReportContext) -> String {
        if ctx.grid.needs_setup {
            return "_Set a freshman and graduation semester to see the plan._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Year | Semester | Status | Taken | Scheduled |\n");
        table.push_str("|---|---|---|---|---|\n");

        for year in &ctx.grid.years {
            for cell in &year.semesters {
                let _ = writeln!(
                    table,
                    "| {} | {} | {} | {} | {} |",
                    year.label,
                    cell.label,
                    cell.status.badge(),
                    Self::course_cell(&cell.taken),
                    Self::course_cell(&cell.scheduled)
                );
            }
        }

        if !ctx.grid.unplaced.is_empty() {
            let _ = writeln!(
                table,
                "| - | Unknown | Done | {} | - |",
                Self::course_cell(&ctx.grid.unplaced)
            );
        }

        table
    }

    fn upcoming_list(ctx: &ReportContext) -> String {
        if ctx.overview.upcoming.is_empty() {
            return "_Nothing scheduled._\n".to_string();
        }
        let mut out = String::new();
        for entry in &ctx.overview.upcoming {
            let _ = writeln!(out, "- {} ({})", entry.course_code, entry.semester_label);
        }
        out
    }
}

/// Replace each `{{name}}` in `template` with its value in one left-to-right
/// pass. Substituted text is never rescanned; unknown names are left as-is.
fn fill_placeholders(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };
        let name = &after[..close];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
