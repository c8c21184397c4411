//! Core module: calendar, placement, audit and the record store they read from

pub mod audit;
pub mod calendar;
pub mod models;
pub mod placement;
pub mod planner;
pub mod report;
pub mod store;

/// Returns the current version of the `degree_planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
