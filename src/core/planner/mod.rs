//! Planner views built on top of the calendar and the record store

pub mod grid;
pub mod progress;

pub use grid::{CourseEntry, PlanningGrid, SemesterCell, YearRow, UNKNOWN_SEMESTER};
pub use progress::{ProgressOverview, CREDITS_TARGET_PER_YEAR};
