//! CLI argument definitions for `degreeplanner`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use degree_planner::config::ConfigOverrides;
use degree_planner::logger::Level;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `student`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ProfileSubcommand {
    /// Show the student's profile
    Show,
    /// Update profile fields. An empty value clears the field.
    Set {
        /// First semester, e.g. "Fall 2024"
        #[arg(long, value_name = "SEMESTER")]
        freshman: Option<String>,
        /// Expected graduation semester, e.g. "Spring 2028"
        #[arg(long, value_name = "SEMESTER")]
        graduation: Option<String>,
        /// Major (program code or name)
        #[arg(long, value_name = "PROGRAM")]
        major: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum CatalogSubcommand {
    /// Search courses by id, title or subject (case-insensitive)
    Search {
        /// Text to look for
        #[arg(value_name = "QUERY")]
        query: String,
    },
    /// Import courses from a CSV file with a `Course ID` header
    Import {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List semesters between two labels, inclusive.
    ///
    /// Without arguments, lists the student's planning window.
    Semesters {
        /// First semester, e.g. "Fall 2024"
        #[arg(value_name = "START", requires = "end")]
        start: Option<String>,
        /// Last semester, e.g. "Spring 2028"
        #[arg(value_name = "END")]
        end: Option<String>,
    },
    /// Show the planning grid by year of school.
    Plan,
    /// Place a course in a semester.
    ///
    /// Past semesters record a completion; the current and future semesters
    /// add to the schedule.
    Add {
        /// Course code, e.g. "CS 2011"
        #[arg(value_name = "COURSE")]
        course: String,
        /// Semester label, e.g. "Fall 2025"
        #[arg(value_name = "SEMESTER")]
        semester: String,
    },
    /// Remove a course from the schedule.
    Remove {
        /// Course code as it was scheduled
        #[arg(value_name = "COURSE")]
        course: String,
    },
    /// Audit progress against a degree program.
    Audit {
        /// Program code or name (defaults to the profile major, then config)
        #[arg(short, long, value_name = "PROGRAM")]
        program: Option<String>,
    },
    /// Show dashboard figures for the current academic year.
    Overview,
    /// View or edit the student's profile.
    Profile {
        #[command(subcommand)]
        subcommand: Option<ProfileSubcommand>,
    },
    /// Search or import the course catalog.
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },
    /// Write a plan report.
    Report {
        /// Output file path (defaults to `<reports_dir>/<student>-plan.<ext>`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or text (txt)
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Print the report instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "degreeplanner",
    about = "Semester planning and degree audit",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Student to operate on
    #[arg(short, long, value_name = "ID")]
    pub student: Option<String>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data file
    #[arg(long = "config-data-file", value_name = "PATH")]
    pub config_data_file: Option<PathBuf>,

    /// Override config data file (short form)
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Override config default program
    #[arg(long = "config-default-program", value_name = "PROGRAM")]
    pub config_default_program: Option<String>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g. `--data-file`) take precedence over long-form
    /// flags (e.g. `--config-data-file`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path),
            verbose: self.config_verbose,
            data_file: self
                .data_file
                .as_ref()
                .or(self.config_data_file.as_ref())
                .map(path),
            student: self
                .student
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            default_program: self.config_default_program.clone(),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(path),
        }
    }
}
