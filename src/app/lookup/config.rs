//! Runtime configuration for web lookups

use serde::{Deserialize, Serialize};
use url::Url;

use crate::app::client::ClientConfig;
use crate::constants::lookup;
use crate::errors::{FetchError, FetchResult};

/// Settings for one lookup: where to look, how far, and how to fetch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL of the paginated nutrition table (without the page parameter)
    pub base_url: String,
    /// Maximum number of pages a lookup may request
    pub max_pages: u32,
    /// HTTP transport settings
    pub client: ClientConfig,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: lookup::BASE_URL.to_string(),
            max_pages: lookup::DEFAULT_MAX_PAGES,
            client: ClientConfig::default(),
        }
    }
}

impl LookupConfig {
    /// Parses the configured base URL
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the URL is malformed or not http(s)
    pub fn parsed_base_url(&self) -> FetchResult<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| FetchError::InvalidUrl {
            url: self.base_url.clone(),
            error: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(FetchError::InvalidUrl {
                url: self.base_url.clone(),
                error: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}
