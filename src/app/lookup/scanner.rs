//! Paginated lookup driver
//!
//! The scanner walks the remote table page by page and stops at the first row
//! whose name contains the query. The walk is a small state machine:
//!
//! ```text
//! Scanning(1) ──fetch ok, rows, no match──▶ Scanning(2) ──▶ ...
//!     │                     │                    │
//!     │ fetch failed        │ empty page         │ first matching row
//!     ▼                     ▼                    ▼
//!   Failed              Exhausted              Found
//! ```
//!
//! Pages are requested strictly in order; page n+1 is never fetched before
//! page n has been consumed.

use tracing::{debug, info, warn};

use crate::app::lookup::fetcher::PageFetcher;
use crate::app::lookup::models::{LookupOutcome, LookupQuery, NutritionRecord};
use crate::app::lookup::parser::RowParser;
use crate::constants::lookup;
use crate::errors::LookupResult;

/// Position of a lookup in its page walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Next page to request
    Scanning(u32),
    /// Terminal: first matching record
    Found(NutritionRecord),
    /// Terminal: the source ran out of rows (or the page bound was reached)
    Exhausted,
    /// Terminal: a page could not be fetched
    Failed(String),
}

impl ScanState {
    /// Outcome for a terminal state, `None` while still scanning
    pub fn into_outcome(self) -> Option<LookupOutcome> {
        match self {
            ScanState::Scanning(_) => None,
            ScanState::Found(record) => Some(LookupOutcome::Found(record)),
            ScanState::Exhausted => Some(LookupOutcome::NotFound),
            ScanState::Failed(message) => Some(LookupOutcome::TransportError(message)),
        }
    }
}

/// Drives pagination over a [`PageFetcher`]
#[derive(Debug)]
pub struct LookupScanner<F> {
    fetcher: F,
    parser: RowParser,
    max_pages: u32,
}

impl<F: PageFetcher> LookupScanner<F> {
    /// Creates a scanner with the default parser and page bound
    ///
    /// # Errors
    ///
    /// Returns `LookupError::InvalidSelector` if the table selectors fail to parse
    pub fn new(fetcher: F) -> LookupResult<Self> {
        Ok(Self::with_parser(fetcher, RowParser::new()?))
    }

    /// Creates a scanner with a custom row parser
    pub fn with_parser(fetcher: F, parser: RowParser) -> Self {
        Self {
            fetcher,
            parser,
            max_pages: lookup::DEFAULT_MAX_PAGES,
        }
    }

    /// Caps the number of pages a lookup may request
    ///
    /// A bound of zero is raised to one so the first page is always read.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Looks up nutrition data for a free-text product name
    ///
    /// A blank name matches nothing and returns `NotFound` without any fetch.
    pub async fn lookup(&self, product_name: &str) -> LookupOutcome {
        match LookupQuery::new(product_name) {
            Ok(query) => self.lookup_query(&query).await,
            Err(e) => {
                warn!("Rejected lookup: {}", e);
                LookupOutcome::NotFound
            }
        }
    }

    /// Runs the page walk for an already-normalized query
    pub async fn lookup_query(&self, query: &LookupQuery) -> LookupOutcome {
        info!("Looking up '{}' (up to {} pages)", query, self.max_pages);

        let mut state = ScanState::Scanning(lookup::FIRST_PAGE);
        loop {
            state = match state {
                ScanState::Scanning(page_index) if page_index > self.max_pages => {
                    warn!(
                        "Stopped lookup for '{}' at page bound {} without an empty page",
                        query, self.max_pages
                    );
                    ScanState::Exhausted
                }
                ScanState::Scanning(page_index) => self.scan_page(page_index, query).await,
                terminal => {
                    let outcome = terminal
                        .into_outcome()
                        .unwrap_or(LookupOutcome::NotFound);
                    match &outcome {
                        LookupOutcome::Found(record) => {
                            info!("Found '{}' for query '{}'", record.name, query)
                        }
                        LookupOutcome::NotFound => info!("No match for '{}'", query),
                        LookupOutcome::TransportError(message) => {
                            warn!("Lookup for '{}' aborted: {}", query, message)
                        }
                    }
                    return outcome;
                }
            };
        }
    }

    /// Fetches and inspects a single page, returning the next state
    pub async fn scan_page(&self, page_index: u32, query: &LookupQuery) -> ScanState {
        let markup = match self.fetcher.fetch(page_index).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!("Failed to fetch page {}: {}", page_index, e);
                return ScanState::Failed(e.to_string());
            }
        };

        let page = self.parser.parse_page(page_index, &markup);
        debug!("Page {}: {} row(s)", page.page_index, page.rows.len());

        if page.is_exhausted() {
            debug!("Page {} is empty, source exhausted", page_index);
            return ScanState::Exhausted;
        }

        let first_match = page
            .rows
            .iter()
            .filter(|row| {
                self.parser
                    .match_key(row)
                    .is_some_and(|key| query.is_contained_in(&key))
            })
            .find_map(|row| self.parser.parse(row));

        match first_match {
            Some(record) => ScanState::Found(record),
            None => match page_index.checked_add(1) {
                Some(next) => ScanState::Scanning(next),
                None => ScanState::Exhausted,
            },
        }
    }
}
