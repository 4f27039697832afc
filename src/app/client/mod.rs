//! HTTP client for the remote nutrition table
//!
//! This module provides the production [`PageFetcher`]: it turns a page index
//! into a request URL and fetches the page over HTTP.
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `http`: Core HTTP operations with forced UTF-8 decoding

use url::Url;

use crate::app::lookup::{LookupConfig, PageFetcher};
use crate::constants::lookup;
use crate::errors::FetchResult;

// Module declarations
pub mod config;
pub mod http;

pub use config::ClientConfig;

use http::HttpHandler;

/// HTTP page source for the nutrition table
///
/// Each instance owns its own connection pool; lookups never share one.
#[derive(Debug, Clone)]
pub struct NutritionClient {
    http_handler: HttpHandler,
    base_url: Url,
}

impl NutritionClient {
    /// Creates a client for the configured table
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the base URL is invalid or the HTTP client
    /// cannot be built
    pub fn new(config: &LookupConfig) -> FetchResult<Self> {
        let base_url = config.parsed_base_url()?;
        let client = config.client.build_http_client()?;

        tracing::debug!("Created nutrition client for {}", base_url);

        Ok(Self {
            http_handler: HttpHandler::new(client),
            base_url,
        })
    }

    /// Builds the URL of one page: the base URL plus `page=<index>`
    ///
    /// Other query parameters on the base URL are kept; an existing `page`
    /// parameter is replaced.
    pub fn page_url(&self, page_index: u32) -> Url {
        let mut url = self.base_url.clone();
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != lookup::PAGE_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(lookup::PAGE_PARAM, &page_index.to_string());
        url
    }

    /// Get the base URL of the nutrition table
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl PageFetcher for NutritionClient {
    async fn fetch(&self, page_index: u32) -> FetchResult<String> {
        let url = self.page_url(page_index);
        tracing::debug!("Fetching page {}: {}", page_index, url);
        self.http_handler.get_page(&url).await
    }
}
