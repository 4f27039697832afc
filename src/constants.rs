//! Application constants for the health tracker
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain for maintainability and clarity.

use std::time::Duration;

/// Environment variable names for configuration overrides
pub mod env {
    /// Overrides the base URL of the remote nutrition table
    pub const LOOKUP_URL: &str = "HEALTH_LOOKUP_URL";

    /// Overrides the diary file location
    pub const DIARY_PATH: &str = "HEALTH_DIARY_PATH";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Browser-like user agent; the nutrition site rejects bare clients
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

    /// Default HTTP request timeout (whole request, including body)
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Remote nutrition table and pagination
pub mod lookup {
    /// Base URL of the paginated nutrition table
    pub const BASE_URL: &str = "https://www.tablycjakalorijnosti.com.ua/tablytsya-yizhyi";

    /// Query parameter carrying the page index
    pub const PAGE_PARAM: &str = "page";

    /// Index of the first page requested by a lookup
    pub const FIRST_PAGE: u32 = 1;

    /// Safety bound on the number of pages a single lookup may request
    pub const DEFAULT_MAX_PAGES: u32 = 500;

    /// Placeholder shown when a row carries no fiber column
    pub const MISSING_FIBER: &str = "—";

    /// Minimum number of cells for a row to be treated as data
    pub const MIN_DATA_CELLS: usize = 2;
}

/// CSS selectors for the nutrition table
pub mod selectors {
    /// Body rows of the nutrition table
    pub const ROW_SELECTOR: &str = "table tbody tr";

    /// Cells within a body row
    pub const CELL_SELECTOR: &str = "td";
}

/// Diary file settings
pub mod diary {
    /// Default diary file, relative to the working directory
    pub const DEFAULT_FILE_NAME: &str = "diary.csv";

    /// Field separator used in diary lines
    pub const SEPARATOR: char = ',';

    /// Accepted weight range in kilograms
    pub const MIN_WEIGHT_KG: f64 = 10.0;
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Accepted daily calorie range
    pub const MIN_CALORIES: f64 = 0.0;
    pub const MAX_CALORIES: f64 = 10_000.0;
}

/// Body-mass index thresholds and input ranges
pub mod bmi {
    /// Below this value the status is "underweight"
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;

    /// Below this value the status is "normal"
    pub const NORMAL_BELOW: f64 = 25.0;

    /// Below this value the status is "overweight", otherwise "obese"
    pub const OVERWEIGHT_BELOW: f64 = 30.0;

    pub const MIN_HEIGHT_CM: f64 = 50.0;
    pub const MAX_HEIGHT_CM: f64 = 250.0;
    pub const MIN_WEIGHT_KG: f64 = 10.0;
    pub const MAX_WEIGHT_KG: f64 = 300.0;
}

/// Local calorie calculator limits
pub mod calories {
    /// Accepted portion size range in grams
    pub const MIN_GRAMS: f64 = 0.0;
    pub const MAX_GRAMS: f64 = 1_000.0;

    /// Portion size assumed when none is given
    pub const DEFAULT_GRAMS: f64 = 100.0;
}

/// Configuration file locations
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE_NAME: &str = "health-tracker.toml";

    /// Directory name under the user config dir
    pub const APP_DIR_NAME: &str = "health-tracker";

    /// Configuration file name under the user config dir
    pub const FILE_NAME: &str = "config.toml";
}

/// Logging and debugging constants
pub mod logging {
    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

// Re-export commonly used constants for convenience
pub use env::{DIARY_PATH as ENV_DIARY_PATH, LOOKUP_URL as ENV_LOOKUP_URL};
pub use http::USER_AGENT;
pub use lookup::{BASE_URL as LOOKUP_BASE_URL, DEFAULT_MAX_PAGES, MISSING_FIBER};
