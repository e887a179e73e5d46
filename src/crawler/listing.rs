//! Listing page crawler with pagination
//!
//! Walks the paginated listing, extracts candidate restaurant links per
//! page, and decides when pagination ends. A failed page fetch is collapsed
//! into "zero listings on this page", which terminates pagination; the
//! cause is logged so failed pages stay distinguishable from a natural
//! end-of-listing in the logs.

use url::Url;

use crate::config::CrawlConfig;
use crate::crawler::fetcher::TabelogFetcher;
use crate::crawler::pace::PaceLimiter;
use crate::error::{CrawlError, FetchError};
use crate::models::{Candidate, SequenceCounter};
use crate::parser::extract_restaurant_links;

/// Per-page candidate cap in test mode
pub const TEST_MODE_ANCHORS: usize = 5;

/// Paginated listing crawler
pub struct ListingCrawler<'a> {
    fetcher: &'a TabelogFetcher,
    pace: &'a PaceLimiter,
    config: CrawlConfig,
    url_builder: PageUrlBuilder,
}

impl<'a> ListingCrawler<'a> {
    /// Create a listing crawler over a shared fetcher and pace limiter
    ///
    /// # Errors
    ///
    /// Returns `CrawlError::Fetch` when the configured base URL does not
    /// parse as an absolute URL.
    pub fn new(
        fetcher: &'a TabelogFetcher,
        pace: &'a PaceLimiter,
        config: CrawlConfig,
    ) -> Result<Self, CrawlError> {
        let url_builder = PageUrlBuilder::new(&config.base_url)?;
        Ok(Self {
            fetcher,
            pace,
            config,
            url_builder,
        })
    }

    /// Walk listing pages and collect candidates in discovery order
    ///
    /// Sequence ids are taken from `seq`, continuing the monotonic counter
    /// across pages. Termination conditions, checked in order after each
    /// page, each terminal:
    ///
    /// 1. zero candidates extracted from the current page;
    /// 2. test mode (always one page);
    /// 3. the incremented page number exceeds `max_page`.
    pub async fn collect_candidates(&self, seq: &mut SequenceCounter) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        let mut page = self.config.start_page;

        loop {
            let url = self.url_builder.page_url(page);
            tracing::info!(page, url = %url, "Fetching listing page");

            let links = match self.fetcher.fetch_page(&url).await {
                Ok(fetched) => {
                    let limit = self.config.test_mode.then_some(TEST_MODE_ANCHORS);
                    extract_restaurant_links(&fetched.body, limit)
                }
                Err(e) => {
                    // Deliberate collapse: a failed page ends pagination the
                    // same way an empty page does, no retry.
                    tracing::warn!(page, url = %url, error = %e, "Listing page fetch failed, treating as empty");
                    Vec::new()
                }
            };

            if links.is_empty() {
                tracing::info!(
                    page,
                    total = candidates.len(),
                    "No more restaurants found, stopping pagination"
                );
                break;
            }

            let found = links.len();
            for link in links {
                candidates.push(Candidate {
                    sequence_id: seq.next_id(),
                    url: link,
                });
            }

            tracing::debug!(page, found, total = candidates.len(), "Processed listing page");

            if self.config.test_mode {
                tracing::debug!("Test mode is enabled, stopping after one page");
                break;
            }

            page += 1;
            if page > self.config.max_page {
                tracing::info!(max_page = self.config.max_page, "Reached page limit, stopping");
                break;
            }

            self.pace.between_pages().await;
        }

        candidates
    }
}

/// Builds per-page listing URLs from the configured base URL
///
/// The page number is joined as a path segment; the original query
/// parameters (sort, filter, etc.) are re-applied unchanged on every page.
#[derive(Debug)]
pub struct PageUrlBuilder {
    base: Url,
}

impl PageUrlBuilder {
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` when `base_url` is not an absolute
    /// URL with a path to append page segments to.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;

        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self { base })
    }

    /// URL of the given listing page
    #[must_use]
    pub fn page_url(&self, page: u32) -> String {
        let mut url = self.base.clone();
        {
            // Checked in `new`: the base can carry path segments.
            let mut segments = url.path_segments_mut().expect("base URL validated");
            segments.pop_if_empty().push(&page.to_string()).push("");
        }
        url.to_string()
    }
}
