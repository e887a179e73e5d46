// Core data structures for the tabecrawl crawler

use serde::Serialize;

use crate::error::FetchError;

/// A discovered link to a restaurant detail page, not yet fetched
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Candidate {
    /// Monotonic id assigned at discovery order, unique across the run
    pub sequence_id: u64,

    /// Detail page URL taken from the listing anchor
    pub url: String,
}

/// Final per-restaurant row, successful or failure-flagged
///
/// Optional fields are `None` when the source page lacks that element.
/// An empty string or zero is never used as a stand-in for "not present":
/// a restaurant can legitimately be unrated, and counts can legitimately
/// be unextractable.
#[derive(Debug, Clone, Serialize, Default)]
pub struct RestaurantRecord {
    pub sequence_id: u64,
    pub url: String,
    pub name: Option<String>,
    pub genre: Option<String>,
    pub score: Option<f64>,
    pub budget_lunch: Option<String>,
    pub budget_dinner: Option<String>,
    pub review_count: Option<u32>,
    pub bookmark_count: Option<u32>,
    /// HTTP status of the detail fetch; 0 when no response was received
    pub http_status: u16,
    /// Fetch error descriptor; `Some` iff the fetch failed, in which case
    /// every content field above is `None`
    pub error: Option<String>,
}

impl RestaurantRecord {
    /// Build a failure record for a candidate whose detail fetch failed.
    ///
    /// The status is taken from the error when a response was received,
    /// and 0 for transport-level faults.
    #[must_use]
    pub fn failure(candidate: &Candidate, error: &FetchError) -> Self {
        Self {
            sequence_id: candidate.sequence_id,
            url: candidate.url.clone(),
            http_status: error.status().unwrap_or(0),
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}

/// Run-scoped sequence id counter for candidate numbering
///
/// Owned state threaded through the listing crawler rather than an ambient
/// global, so the crawler stays composable and testable in isolation.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    next: u64,
}

impl SequenceCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id and advance
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next
    }
}
