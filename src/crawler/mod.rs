//! Web crawling functionality with rate limiting
//!
//! This module implements the core crawl pipeline: a paginated listing
//! crawler that discovers restaurant detail links, and a detail crawler
//! that fetches and extracts each one. Both share a single HTTP client
//! and one politeness-delay discipline.

pub mod detail;
pub mod fetcher;
pub mod listing;
pub mod pace;

pub use detail::DetailCrawler;
pub use fetcher::{FetchedPage, TabelogFetcher};
pub use listing::{ListingCrawler, PageUrlBuilder, TEST_MODE_ANCHORS};
pub use pace::PaceLimiter;
