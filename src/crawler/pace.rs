//! Politeness delays between requests
//!
//! The crawl uses two delays: a fixed pause between listing pages and a
//! randomized pause after every detail fetch. Both are modeled as explicit
//! steps on one limiter so no control-flow branch can accidentally skip
//! them; the per-item pause in particular runs after failed fetches too.

use rand::Rng;
use std::time::Duration;

/// Fixed pause between listing pages
const PAGE_DELAY: Duration = Duration::from_secs(1);

/// Bounds of the randomized pause after each detail fetch, in seconds
const ITEM_DELAY_SECS: (f64, f64) = (1.0, 3.0);

/// Politeness delay discipline shared by the listing and detail crawlers
#[derive(Debug, Clone)]
pub struct PaceLimiter {
    page_delay: Duration,
    item_delay_secs: (f64, f64),
}

impl PaceLimiter {
    /// Limiter with the production delays
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_delay: PAGE_DELAY,
            item_delay_secs: ITEM_DELAY_SECS,
        }
    }

    /// Limiter with zero delays, for tests
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            page_delay: Duration::ZERO,
            item_delay_secs: (0.0, 0.0),
        }
    }

    /// Fixed pause between listing pages
    pub async fn between_pages(&self) {
        if !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }
    }

    /// Randomized pause after a detail fetch attempt, success or failure
    pub async fn after_item(&self) {
        let delay = self.sample_item_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn sample_item_delay(&self) -> Duration {
        let (min, max) = self.item_delay_secs;
        if max <= 0.0 {
            return Duration::ZERO;
        }
        let secs = rand::thread_rng().gen_range(min..=max);
        Duration::from_secs_f64(secs)
    }
}

impl Default for PaceLimiter {
    fn default() -> Self {
        Self::new()
    }
}
