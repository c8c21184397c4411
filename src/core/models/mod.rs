//! Data models for the degree planner

pub mod course;
pub mod degree;
pub mod semester;
pub mod student;

pub use course::CatalogCourse;
pub use degree::{Program, Requirement};
pub use semester::{AcademicState, Semester, Term};
pub use student::{CompletionRecord, Profile, ScheduleAssignment};
