//! Detail page crawler
//!
//! Consumes the candidate list produced by the listing crawler, fetches
//! each detail page, and emits exactly one record per candidate. A failed
//! fetch is recorded, never dropped, and never stops the batch.

use crate::crawler::fetcher::TabelogFetcher;
use crate::crawler::pace::PaceLimiter;
use crate::models::{Candidate, RestaurantRecord};
use crate::parser::{BudgetSlot, DetailPage};

/// Per-candidate detail fetcher and extractor
pub struct DetailCrawler<'a> {
    fetcher: &'a TabelogFetcher,
    pace: &'a PaceLimiter,
}

impl<'a> DetailCrawler<'a> {
    /// Create a detail crawler over a shared fetcher and pace limiter
    #[must_use]
    pub fn new(fetcher: &'a TabelogFetcher, pace: &'a PaceLimiter) -> Self {
        Self { fetcher, pace }
    }

    /// Fetch and extract every candidate, in input order
    ///
    /// Returns one record per candidate. The politeness pause runs after
    /// every fetch attempt, including failed ones.
    pub async fn harvest(&self, candidates: &[Candidate]) -> Vec<RestaurantRecord> {
        let mut records = Vec::with_capacity(candidates.len());

        for (i, candidate) in candidates.iter().enumerate() {
            tracing::debug!(
                item = i + 1,
                total = candidates.len(),
                url = %candidate.url,
                "Fetching detail page"
            );

            let outcome = self.fetcher.fetch_page(&candidate.url).await;
            self.pace.after_item().await;

            let record = match outcome {
                Ok(fetched) => {
                    let page = DetailPage::parse(&fetched.body);
                    RestaurantRecord {
                        sequence_id: candidate.sequence_id,
                        url: candidate.url.clone(),
                        name: page.name(),
                        genre: page.genre(),
                        score: page.score(),
                        budget_lunch: page.budget(BudgetSlot::Lunch),
                        budget_dinner: page.budget(BudgetSlot::Dinner),
                        review_count: page.review_count(),
                        bookmark_count: page.bookmark_count(),
                        http_status: fetched.status,
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::error!(url = %candidate.url, error = %e, "Detail fetch failed");
                    RestaurantRecord::failure(candidate, &e)
                }
            };

            records.push(record);
        }

        tracing::info!(
            total = records.len(),
            failed = records.iter().filter(|r| r.error.is_some()).count(),
            "Completed detail harvest"
        );

        records
    }
}
