//! Page source abstraction
//!
//! The scanner only needs "give me the markup of page N". Production code
//! implements this over HTTP in [`crate::app::client::NutritionClient`]; tests
//! implement it over canned pages.

use std::future::Future;
use std::sync::Arc;

use crate::errors::FetchResult;

/// Source of raw nutrition table pages
pub trait PageFetcher: Send + Sync {
    /// Fetches the markup of one page
    ///
    /// # Arguments
    ///
    /// * `page_index` - 1-based page number
    ///
    /// # Errors
    ///
    /// Any error is treated as a transport failure and aborts the lookup
    fn fetch(&self, page_index: u32) -> impl Future<Output = FetchResult<String>> + Send;
}

impl<T: PageFetcher> PageFetcher for Arc<T> {
    fn fetch(&self, page_index: u32) -> impl Future<Output = FetchResult<String>> + Send {
        (**self).fetch(page_index)
    }
}

impl<T: PageFetcher> PageFetcher for &T {
    fn fetch(&self, page_index: u32) -> impl Future<Output = FetchResult<String>> + Send {
        (**self).fetch(page_index)
    }
}
