//! Error types for the health tracker
//!
//! This module defines the error types for every component of the application.
//! Errors are designed to be actionable and provide clear context for debugging and
//! user feedback.
//!
//! Note that a web lookup never returns these as `Err`: transport failures are
//! folded into [`crate::app::LookupOutcome::TransportError`] by the scanner.

use std::path::PathBuf;
use thiserror::Error;

/// Page fetching errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {url} - {error}")]
    InvalidUrl { url: String, error: String },

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// Synthetic or adapter-level transport failure
    #[error("{0}")]
    Transport(String),
}

/// Lookup setup errors
#[derive(Error, Debug)]
pub enum LookupError {
    /// CSS selector error
    #[error("Invalid CSS selector: {selector}")]
    InvalidSelector { selector: String },

    /// Query is empty after trimming
    #[error("Product name must not be blank")]
    BlankQuery,

    /// Fetcher could not be created
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Diary file errors
#[derive(Error, Debug)]
pub enum DiaryError {
    /// Diary file does not exist yet
    #[error("Diary file not found: {path}")]
    NotFound { path: PathBuf },

    /// I/O error reading or writing the diary
    #[error("Diary I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line could not be parsed into an entry
    #[error("Invalid diary line {line}: {content}")]
    InvalidLine { line: usize, content: String },

    /// Entry rejected before writing
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Validation errors for user-supplied values
#[derive(Error, Debug)]
pub enum InputError {
    /// Value outside the accepted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Value is not a finite number
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file already exists
    #[error("Configuration file already exists: {path}. Use --force to overwrite")]
    AlreadyExists { path: PathBuf },

    /// Invalid configuration format
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    /// I/O error reading or writing configuration
    #[error("Configuration I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No user configuration directory on this platform
    #[error("Could not determine user config directory")]
    NoConfigDir,
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Lookup error
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Diary error
    #[error(transparent)]
    Diary(#[from] DiaryError),

    /// Input validation error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON output error
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Fetch(_) => "fetch",
            AppError::Lookup(_) => "lookup",
            AppError::Diary(_) => "diary",
            AppError::Input(_) => "input",
            AppError::Config(_) => "config",
            AppError::Json(_) => "json",
            AppError::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Fetch result type alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Lookup result type alias
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Diary result type alias
pub type DiaryResult<T> = std::result::Result<T, DiaryError>;

/// Input validation result type alias
pub type InputResult<T> = std::result::Result<T, InputError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Check that `value` is finite and within `[min, max]`
pub(crate) fn ensure_range(field: &'static str, value: f64, min: f64, max: f64) -> InputResult<f64> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
