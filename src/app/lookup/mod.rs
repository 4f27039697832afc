//! Web lookup of food nutrition data
//!
//! This module finds nutrition values for an arbitrary product name by walking
//! a paginated third-party table and returning the first row whose name
//! contains the query.
//!
//! The module is organized into specialized components:
//! - `models`: records, queries and the three-way outcome
//! - `fetcher`: the page source seam
//! - `parser`: table row extraction
//! - `scanner`: pagination and matching
//! - `config`: runtime settings
//!
//! # Examples
//!
//! ```rust,no_run
//! use health_tracker::app::{lookup_product, LookupConfig, LookupOutcome};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! match lookup_product(&LookupConfig::default(), "гречка").await? {
//!     LookupOutcome::Found(record) => println!("{}", record),
//!     LookupOutcome::NotFound => println!("nothing"),
//!     LookupOutcome::TransportError(message) => eprintln!("{}", message),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod scanner;

pub use config::LookupConfig;
pub use fetcher::PageFetcher;
pub use models::{LookupOutcome, LookupQuery, NutritionRecord, PageContext, RawRow};
pub use parser::RowParser;
pub use scanner::{LookupScanner, ScanState};

use crate::app::client::NutritionClient;
use crate::errors::LookupResult;

/// Looks up a product over HTTP with a fresh client
///
/// Each call builds its own client; nothing is shared between lookups.
///
/// # Errors
///
/// Returns `LookupError` only for setup problems (bad URL, client build,
/// selectors). Network failures during the walk are reported as
/// `LookupOutcome::TransportError`.
pub async fn lookup_product(config: &LookupConfig, product_name: &str) -> LookupResult<LookupOutcome> {
    let client = NutritionClient::new(config)?;
    let scanner = LookupScanner::new(client)?.with_max_pages(config.max_pages);
    Ok(scanner.lookup(product_name).await)
}
