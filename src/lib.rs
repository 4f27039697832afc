//! Health Tracker Library
//!
//! A personal health toolkit: BMI and calorie calculators, a flat-file diary,
//! and a paginated web lookup of food nutrition data for products missing from
//! the local calorie table.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
