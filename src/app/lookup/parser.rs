//! Nutrition table parsing
//!
//! Turns fetched markup into rows of cell text and rows into
//! [`NutritionRecord`]s. Rows with fewer than two cells are header or
//! decoration rows and are skipped rather than reported.

use scraper::{ElementRef, Html, Selector};

use crate::app::lookup::models::{capitalize, NutritionRecord, PageContext};
use crate::constants::{lookup, selectors};
use crate::errors::{LookupError, LookupResult};

/// Extracts records from the remote nutrition table
#[derive(Debug, Clone)]
pub struct RowParser {
    row_selector: Selector,
    cell_selector: Selector,
}

impl RowParser {
    /// Creates a parser using the default table selectors
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidSelector` if a selector fails to parse
    pub fn new() -> LookupResult<Self> {
        Self::with_selectors(selectors::ROW_SELECTOR, selectors::CELL_SELECTOR)
    }

    /// Creates a parser with custom row and cell selectors
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidSelector` if a selector fails to parse
    pub fn with_selectors(row_selector: &str, cell_selector: &str) -> LookupResult<Self> {
        Ok(Self {
            row_selector: Self::parse_selector(row_selector)?,
            cell_selector: Self::parse_selector(cell_selector)?,
        })
    }

    fn parse_selector(selector: &str) -> LookupResult<Selector> {
        Selector::parse(selector).map_err(|_| LookupError::InvalidSelector {
            selector: selector.to_string(),
        })
    }

    /// Collects the body rows of one page as cell text, in document order
    pub fn parse_page(&self, page_index: u32, markup: &str) -> PageContext {
        let document = Html::parse_document(markup);
        let rows = document
            .select(&self.row_selector)
            .map(|row| row.select(&self.cell_selector).map(cell_text).collect())
            .collect();

        PageContext { page_index, rows }
    }

    /// Lower-cased, trimmed name cell used for matching, or `None` for a row
    /// under two cells
    ///
    /// Matching runs on this key rather than on the capitalized display name,
    /// which does not always lower-case back to the same text (`ß` → `SS`).
    pub fn match_key(&self, cells: &[String]) -> Option<String> {
        if cells.len() < lookup::MIN_DATA_CELLS {
            return None;
        }
        cells.first().map(|name| name.trim().to_lowercase())
    }

    /// Builds a record from one row, or `None` for a row under two cells
    ///
    /// Cells: name, calories, protein, carbs, fat and optional fiber. Missing
    /// protein/carbs/fat default to an empty string; missing fiber to "—".
    pub fn parse(&self, cells: &[String]) -> Option<NutritionRecord> {
        if cells.len() < lookup::MIN_DATA_CELLS {
            tracing::trace!("Skipping row with {} cell(s)", cells.len());
            return None;
        }

        let cell = |index: usize| {
            cells
                .get(index)
                .map(|text| text.trim().to_string())
                .unwrap_or_default()
        };

        let fiber_g = cells
            .get(5)
            .map(|text| text.trim().to_string())
            .unwrap_or_else(|| lookup::MISSING_FIBER.to_string());

        Some(NutritionRecord {
            name: capitalize(&cell(0).to_lowercase()),
            calories_per_100g: cell(1),
            protein_g: cell(2),
            carbs_g: cell(3),
            fat_g: cell(4),
            fiber_g,
        })
    }
}

/// Concatenated trimmed text fragments of a cell
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().map(str::trim).collect()
}
