//! Core HTTP operations
//!
//! A single GET per call: no retry, no rate limiting. Bodies are always
//! decoded as UTF-8 because the nutrition site serves UTF-8 under unreliable
//! charset headers.

use reqwest::Client;
use url::Url;

use crate::errors::FetchResult;

/// HTTP operations handler
#[derive(Debug, Clone)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    /// Creates a new HttpHandler around an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches a page and decodes the body as UTF-8
    ///
    /// Invalid byte sequences are replaced rather than rejected. Non-success
    /// statuses are logged and the body is returned anyway.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to fetch
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if sending the request or reading the body fails
    pub async fn get_page(&self, url: &Url) -> FetchResult<String> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Server returned HTTP {} for {}", status, url);
        }

        let bytes = response.bytes().await?;
        let text = decode_utf8(&bytes);
        tracing::debug!("Fetched {} ({} bytes)", url, bytes.len());
        Ok(text)
    }
}

/// Decodes bytes as UTF-8, ignoring any declared charset
pub(crate) fn decode_utf8(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
