//! Record store: the collaborator that holds programs, the course catalog
//! and each student's profile, completions and schedule.
//!
//! The core only talks to the [`RecordStore`] trait. Two implementations
//! ship with the crate: [`MemoryStore`] keeps everything in keyed maps and
//! [`FileStore`] persists a [`MemoryStore`] to a TOML data file after every
//! write.

pub mod csv_import;
pub mod file;
pub mod memory;

pub use csv_import::{parse_catalog_csv, read_catalog_csv};
pub use file::FileStore;
pub use memory::{Dataset, MemoryStore, StudentRecords};

use crate::core::models::{CatalogCourse, CompletionRecord, Profile, Program, Requirement, ScheduleAssignment};
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Data-access failure. Always propagated to the caller, never swallowed.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid TOML for the data set
    #[error("store data is malformed: {0}")]
    Parse(#[from] toml::de::Error),

    /// The data set could not be encoded
    #[error("failed to encode store data: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A catalog CSV could not be imported
    #[error("catalog CSV line {line}: {message}")]
    Csv {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// The store refused the request
    #[error("store rejected request: {message}")]
    Rejected {
        /// Reason given by the store
        message: String,
    },
}

/// Access to persisted planner data, scoped per student where relevant.
///
/// Course codes are stored and keyed exactly as given; normalization is the
/// caller's concern when comparing.
pub trait RecordStore {
    /// Program whose code equals `code` exactly
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn program_by_code(&self, code: &str) -> StoreResult<Option<Program>>;

    /// First program whose name equals `name`, ignoring case
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn program_by_name(&self, name: &str) -> StoreResult<Option<Program>>;

    /// Requirement rows of a program ordered by `sequence`. Unknown ids
    /// yield an empty list.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn requirements(&self, program_id: &str) -> StoreResult<Vec<Requirement>>;

    /// Completed courses of a student
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn completions(&self, student: &str) -> StoreResult<Vec<CompletionRecord>>;

    /// Scheduled courses of a student
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn schedule(&self, student: &str) -> StoreResult<Vec<ScheduleAssignment>>;

    /// Profile of a student, if one exists
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn profile(&self, student: &str) -> StoreResult<Option<Profile>>;

    /// Every catalog course ordered by course id
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    fn catalog(&self) -> StoreResult<Vec<CatalogCourse>>;

    /// Insert or overwrite the completion keyed by (`student`, `course_code`)
    ///
    /// # Errors
    /// Returns an error if the write fails
    fn upsert_completion(
        &mut self,
        student: &str,
        course_code: &str,
        semester_label: Option<&str>,
    ) -> StoreResult<()>;

    /// Insert or overwrite the schedule entry keyed by (`student`, `course_code`)
    ///
    /// # Errors
    /// Returns an error if the write fails
    fn upsert_schedule(&mut self, student: &str, course_code: &str, semester_label: &str) -> StoreResult<()>;

    /// Delete a schedule entry. Returns whether one existed.
    ///
    /// # Errors
    /// Returns an error if the write fails
    fn remove_scheduled(&mut self, student: &str, course_code: &str) -> StoreResult<bool>;

    /// Replace a student's profile
    ///
    /// # Errors
    /// Returns an error if the write fails
    fn save_profile(&mut self, student: &str, profile: Profile) -> StoreResult<()>;

    /// Insert or overwrite catalog courses keyed by course id. Returns the
    /// number of courses written.
    ///
    /// # Errors
    /// Returns an error if the write fails
    fn import_catalog(&mut self, courses: Vec<CatalogCourse>) -> StoreResult<usize>;
}
