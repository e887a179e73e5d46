//! Listing page extraction
//!
//! Pulls restaurant detail links out of one paginated listing page.

use scraper::Html;

use crate::parser::selectors;

/// Extract restaurant detail links from a listing page in document order.
///
/// Anchors are truncated to `limit` *before* dropping anchors without a
/// usable `href`, matching the per-page cap semantics of test mode.
#[must_use]
pub fn extract_restaurant_links(html: &str, limit: Option<usize>) -> Vec<String> {
    let document = Html::parse_document(html);

    let anchors: Vec<_> = document.select(&selectors::RESTAURANT_LINK).collect();
    let retained = match limit {
        Some(n) => &anchors[..anchors.len().min(n)],
        None => &anchors[..],
    };

    retained
        .iter()
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_owned)
        .collect()
}
