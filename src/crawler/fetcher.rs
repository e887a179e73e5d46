//! HTTP fetcher with rate limiting
//!
//! One long-lived client shared by the listing and detail crawlers. The
//! client carries the configured user agent and timeouts; a governor rate
//! limiter caps the request rate to the origin server. Fetching is
//! single-attempt: the pipeline has no retry anywhere, failed pages are
//! absorbed by the callers.

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::Client;
use std::num::NonZeroU32;

use crate::config::CrawlerConfig;
use crate::error::FetchError;

/// A successfully fetched page
#[derive(Debug)]
pub struct FetchedPage {
    /// HTTP status of the response
    pub status: u16,

    /// Decoded response body
    pub body: String,
}

/// Rate-limited HTTP fetcher for listing and detail pages
pub struct TabelogFetcher {
    /// HTTP client with configured user agent and timeouts
    client: Client,

    /// Rate limiter to control request frequency
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Optional base URL override for testing with mock servers
    base_url: Option<String>,
}

impl TabelogFetcher {
    /// Create a new fetcher from the crawler configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &CrawlerConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
            .cookie_store(config.enable_cookies)
            .gzip(true)
            .build()?;

        let rate = NonZeroU32::new(config.rate_limit as u32).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(rate);
        let rate_limiter = RateLimiter::direct(quota);

        Ok(Self {
            client,
            rate_limiter,
            base_url: None,
        })
    }

    /// Create a new fetcher with a base URL prepended to all requests
    ///
    /// Used by tests to point relative candidate URLs at a mock server.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_base_url(config: &CrawlerConfig, base_url: &str) -> Result<Self, FetchError> {
        let mut fetcher = Self::new(config)?;
        fetcher.base_url = Some(base_url.to_string());
        Ok(fetcher)
    }

    /// Fetch a page, waiting on the rate limiter first
    ///
    /// # Errors
    ///
    /// - `FetchError::HttpStatus` for a non-success response, carrying the
    ///   status code
    /// - `FetchError::Timeout` when the request times out
    /// - `FetchError::Http` for other transport-level failures
    pub async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.rate_limiter.until_ready().await;

        let full_url = if let Some(base) = &self.base_url {
            format!("{base}{url}")
        } else {
            url.to_string()
        };

        tracing::trace!(url = %full_url, "Fetching URL");

        let response = self
            .client
            .get(&full_url)
            .send()
            .await
            .map_err(|e| if e.is_timeout() { FetchError::Timeout } else { FetchError::Http(e) })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: full_url,
            });
        }

        let body = response.text().await.map_err(FetchError::Http)?;

        Ok(FetchedPage {
            status: status.as_u16(),
            body,
        })
    }
}
