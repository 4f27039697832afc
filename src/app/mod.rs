//! Core application logic for the health tracker
//!
//! This module contains the web nutrition lookup and its HTTP client, plus the
//! local calculators and the diary store.
//!
//! # Examples
//!
//! ```rust,no_run
//! use health_tracker::app::{calculate_bmi, BmiInput, LookupConfig, lookup_product};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = calculate_bmi(&BmiInput::new(170.0, 65.0)?);
//! println!("{}", report);
//!
//! let outcome = lookup_product(&LookupConfig::default(), "гречка").await?;
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod bmi;
pub mod calories;
pub mod client;
pub mod diary;
pub mod lookup;

// Re-export main public API
pub use bmi::{calculate_bmi, BmiInput, BmiReport, BmiStatus};
pub use calories::{calculate_calories, kcal_per_100g, known_products, portion_calories};
pub use client::{ClientConfig, NutritionClient};
pub use diary::{Diary, DiaryConfig, DiaryEntry, DiaryStats};
pub use lookup::{
    lookup_product, LookupConfig, LookupOutcome, LookupQuery, LookupScanner, NutritionRecord,
    PageFetcher, RowParser,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Ensure public API is accessible
        let config = LookupConfig::default();
        assert!(config.max_pages > 0);
        assert_eq!(kcal_per_100g("хліб"), Some(265));
    }
}
