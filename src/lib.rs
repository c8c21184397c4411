//! Shared library for the degree planner
//! Contains the semester calendar, placement policy, degree audit and record store

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
