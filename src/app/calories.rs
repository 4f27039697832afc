//! Local calorie table
//!
//! A handful of staple foods with fixed values. Anything else is looked up on
//! the web via [`crate::app::lookup`].

use crate::app::bmi::round2;
use crate::constants::calories;
use crate::errors::{ensure_range, InputResult};

/// kcal per 100 g for the built-in products
pub const CALORIE_TABLE: &[(&str, u32)] = &[
    ("яблуко", 52),
    ("хліб", 265),
    ("молоко", 42),
    ("яйце", 155),
];

/// kcal per 100 g for a product in the local table (case-insensitive)
pub fn kcal_per_100g(product: &str) -> Option<u32> {
    let key = product.trim().to_lowercase();
    CALORIE_TABLE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, kcal)| *kcal)
}

/// Names of the products in the local table
pub fn known_products() -> impl Iterator<Item = &'static str> {
    CALORIE_TABLE.iter().map(|(name, _)| *name)
}

/// Validates a portion size in grams
///
/// # Errors
///
/// Returns `InputError` if the portion is out of range or not finite
pub fn validate_grams(grams: f64) -> InputResult<f64> {
    ensure_range("grams", grams, calories::MIN_GRAMS, calories::MAX_GRAMS)
}

/// Calories in a portion, rounded to two decimals
pub fn portion_calories(kcal_per_100g: f64, grams: f64) -> f64 {
    round2(kcal_per_100g * grams / 100.0)
}

/// Calories in `grams` of a product from the local table
///
/// Returns `Ok(None)` when the product is not in the table.
///
/// # Errors
///
/// Returns `InputError` if the portion is out of range
pub fn calculate_calories(product: &str, grams: f64) -> InputResult<Option<f64>> {
    let grams = validate_grams(grams)?;
    Ok(kcal_per_100g(product).map(|kcal| portion_calories(f64::from(kcal), grams)))
}
