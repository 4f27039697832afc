//! Prelude module for the health tracker library
//!
//! This module re-exports the most commonly used items from the library,
//! providing a convenient way to import everything needed for typical usage
//! with a single `use health_tracker::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use health_tracker::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::load(None).await?;
//!     let client = NutritionClient::new(&config.lookup_config()?)?;
//!     let scanner = LookupScanner::new(client)?;
//!
//!     match scanner.lookup("гречка").await {
//!         LookupOutcome::Found(record) => println!("{}", record),
//!         other => println!("{}", other),
//!     }
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Essential app components
pub use crate::app::{
    // Calculators
    calculate_bmi,
    calculate_calories,
    BmiInput,
    BmiReport,
    BmiStatus,

    // Diary
    Diary,
    DiaryConfig,
    DiaryEntry,
    DiaryStats,

    // Web lookup
    lookup_product,
    ClientConfig,
    LookupConfig,
    LookupOutcome,
    LookupQuery,
    LookupScanner,
    NutritionClient,
    NutritionRecord,
    PageFetcher,
    RowParser,
};

pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{DEFAULT_MAX_PAGES, LOOKUP_BASE_URL, USER_AGENT};

// Common external crate re-exports for convenience
pub use tokio;
