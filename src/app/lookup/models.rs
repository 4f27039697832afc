//! Data models for the nutrition lookup
//!
//! This module defines the values that flow through a lookup: the normalized
//! query, the record parsed from one table row, the per-page context and the
//! three-way outcome returned to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::lookup;
use crate::errors::{LookupError, LookupResult};

/// Nutrition values for one food, copied verbatim from the remote table
///
/// All values are display strings. The source formats numbers inconsistently,
/// so nothing is parsed or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Display name (capitalized)
    pub name: String,
    /// Calories per 100 g
    pub calories_per_100g: String,
    /// Protein, grams per 100 g
    pub protein_g: String,
    /// Carbohydrates, grams per 100 g
    pub carbs_g: String,
    /// Fat, grams per 100 g
    pub fat_g: String,
    /// Fiber, grams per 100 g, or [`lookup::MISSING_FIBER`]
    pub fiber_g: String,
}

impl NutritionRecord {
    /// Best-effort numeric reading of the calorie text
    ///
    /// Accepts a decimal comma and ignores trailing units, e.g. `"52,5 kcal"`.
    pub fn calories_numeric(&self) -> Option<f64> {
        let normalized = self.calories_per_100g.trim().replace(',', ".");
        let numeric: String = normalized
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        numeric.parse().ok()
    }

    /// Whether the source row carried a fiber column
    pub fn has_fiber(&self) -> bool {
        self.fiber_g != lookup::MISSING_FIBER
    }
}

impl fmt::Display for NutritionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Продукт: {}", self.name)?;
        writeln!(f, "Калорійність: {} ккал / 100 г", self.calories_per_100g)?;
        writeln!(f, "Білки: {} г", self.protein_g)?;
        writeln!(f, "Вуглеводи: {} г", self.carbs_g)?;
        writeln!(f, "Жири: {} г", self.fat_g)?;
        write!(f, "Клітковина: {} г", self.fiber_g)
    }
}

/// Normalized food-name fragment used for substring matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery(String);

impl LookupQuery {
    /// Lower-case and trim a free-text product name
    ///
    /// # Errors
    ///
    /// Returns `LookupError::BlankQuery` if nothing remains after trimming.
    pub fn new(product_name: &str) -> LookupResult<Self> {
        let normalized = product_name.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(LookupError::BlankQuery);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether a lower-cased row name contains the query
    pub fn is_contained_in(&self, match_key: &str) -> bool {
        match_key.contains(self.0.as_str())
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cell texts of one table row, in document order
pub type RawRow = Vec<String>;

/// State for one page of a lookup; dropped once the page is consumed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// 1-based page index
    pub page_index: u32,
    /// Body rows found on the page
    pub rows: Vec<RawRow>,
}

impl PageContext {
    /// An empty page marks the end of the source
    pub fn is_exhausted(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Result of one lookup; exactly one variant is produced per call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// First matching row in page-then-row order
    Found(NutritionRecord),
    /// Source paginated to its end without a match
    NotFound,
    /// Fetching a page failed; the lookup was aborted
    TransportError(String),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The matched record, if any
    pub fn record(&self) -> Option<&NutritionRecord> {
        match self {
            Self::Found(record) => Some(record),
            _ => None,
        }
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(record) => write!(f, "{}", record),
            Self::NotFound => f.write_str("Не знайдено інформації"),
            Self::TransportError(message) => write!(f, "Помилка при підключенні: {}", message),
        }
    }
}

/// Upper-case the first character and lower-case the rest
pub(crate) fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
