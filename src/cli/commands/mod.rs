//! CLI command handlers for `degreeplanner`.
//!
//! Each command is implemented in its own submodule. Handlers that touch
//! student data open a [`Session`] and return `Err(message)` on failure;
//! `main` reports the message and exits non-zero.

pub mod audit;
pub mod catalog;
pub mod config;
pub mod planning;
pub mod profile;
pub mod report;

use degree_planner::config::Config;
use degree_planner::core::calendar::SemesterCalendar;
use degree_planner::core::models::Profile;
use degree_planner::core::store::{FileStore, RecordStore};
use degree_planner::debug;

/// Student used when neither the flag nor the config names one
const FALLBACK_STUDENT: &str = "default";

/// Everything a data command needs: the store, the student and "now"
pub struct Session {
    pub store: FileStore,
    pub student: String,
    pub calendar: SemesterCalendar,
}

impl Session {
    /// Open the configured data file for the configured student
    pub fn open(config: &Config) -> Result<Self, String> {
        if config.store.data_file.is_empty() {
            return Err("No data file configured (set store.data_file or pass --data-file)".to_string());
        }
        let store = FileStore::open(&config.store.data_file)
            .map_err(|e| format!("Failed to open {}: {e}", config.store.data_file))?;
        let student = if config.store.student.trim().is_empty() {
            FALLBACK_STUDENT.to_string()
        } else {
            config.store.student.trim().to_string()
        };
        let calendar = SemesterCalendar::now();
        debug!(
            "Session for {student} on {} (current semester {})",
            store.path().display(),
            calendar.current_semester()
        );
        Ok(Self {
            store,
            student,
            calendar,
        })
    }

    /// The student's profile, or an empty one
    pub fn profile(&self) -> Result<Profile, String> {
        self.store
            .profile(&self.student)
            .map(Option::unwrap_or_default)
            .map_err(|e| format!("Failed to load profile for {}: {e}", self.student))
    }
}
