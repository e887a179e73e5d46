//! tabecrawl - Tabelog restaurant listing crawler
//!
//! A crawler for a paginated restaurant-listing site: it walks the listing
//! pages, discovers per-restaurant detail pages, fetches and parses each
//! one, and writes a CSV dataset.
//!
//! # Architecture
//!
//! - [`config`] - Configuration management and settings
//! - [`crawler`] - Listing traversal and detail harvesting with rate limiting
//! - [`parser`] - HTML parsing and field extraction
//! - [`models`] - Core data structures and types
//! - [`output`] - CSV output writing
//!
//! # Example
//!
//! ```no_run
//! use tabecrawl::config::Config;
//! use tabecrawl::crawler::{ListingCrawler, PaceLimiter, TabelogFetcher};
//! use tabecrawl::models::SequenceCounter;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let fetcher = TabelogFetcher::new(&config.crawler)?;
//!     let pace = PaceLimiter::new();
//!     let listing = ListingCrawler::new(&fetcher, &pace, config.crawl.clone())?;
//!     let mut seq = SequenceCounter::new();
//!     let candidates = listing.collect_candidates(&mut seq).await;
//!     println!("Found {} restaurants", candidates.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod crawler;
pub mod error;
pub mod models;
pub mod output;
pub mod parser;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::crawler::{DetailCrawler, ListingCrawler, PaceLimiter, TabelogFetcher};
    pub use crate::error::{CrawlError, FetchError};
    pub use crate::models::{Candidate, RestaurantRecord, SequenceCounter};
    pub use crate::output::CsvWriter;
    pub use crate::parser::{BudgetSlot, DetailPage};
}

// Direct re-exports for convenience
pub use models::{Candidate, RestaurantRecord, SequenceCounter};
