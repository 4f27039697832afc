//! HTTP client configuration and building logic
//!
//! This module handles the configuration and construction of the HTTP client
//! used to read the nutrition table.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::constants::http;
use crate::errors::{FetchError, FetchResult};

/// Configuration for the page-fetching HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout (connect + headers + body)
    pub request_timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: http::USER_AGENT.to_string(),
            request_timeout: http::DEFAULT_TIMEOUT,
            connect_timeout: http::CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Builds the HTTP client with the specified configuration
    ///
    /// No cookie store and no default headers beyond the user agent; the
    /// nutrition table is public.
    pub fn build_http_client(&self) -> FetchResult<Client> {
        Client::builder()
            .timeout(self.request_timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::ClientBuild {
                reason: e.to_string(),
            })
    }
}
