//! Parser integration tests using HTML fixture files
//!
//! Exercises listing link extraction and detail field extraction against
//! realistic page snapshots.

use tabecrawl::parser::{extract_restaurant_links, BudgetSlot, DetailPage};

use std::fs;

/// Test fixture paths
const FIXTURES_DIR: &str = "tests/fixtures/html";

fn load_fixture(filename: &str) -> String {
    let path = format!("{FIXTURES_DIR}/{filename}");
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

// ============================================================================
// Listing page tests
// ============================================================================

#[test]
fn test_listing_extracts_all_anchors_in_order() {
    let html = load_fixture("listing_page.html");
    let links = extract_restaurant_links(&html, None);

    assert_eq!(links.len(), 8);
    assert_eq!(links[0], "https://tabelog.com/tokyo/A1310/A131002/13000000/");
    assert_eq!(links[7], "https://tabelog.com/tokyo/A1310/A131002/13000007/");
}

#[test]
fn test_listing_test_mode_cap() {
    let html = load_fixture("listing_page.html");
    let links = extract_restaurant_links(&html, Some(5));

    assert_eq!(links.len(), 5);
    assert_eq!(links[4], "https://tabelog.com/tokyo/A1310/A131002/13000004/");
}

// ============================================================================
// Detail page tests
// ============================================================================

#[test]
fn test_detail_name() {
    let page = DetailPage::parse(&load_fixture("detail_page.html"));
    assert_eq!(page.name().as_deref(), Some("焼鳥 みやがわ"));
}

#[test]
fn test_detail_genre_first_chip() {
    let page = DetailPage::parse(&load_fixture("detail_page.html"));
    assert_eq!(page.genre().as_deref(), Some("焼鳥"));
}

#[test]
fn test_detail_score() {
    let page = DetailPage::parse(&load_fixture("detail_page.html"));
    assert_eq!(page.score(), Some(3.72));
}

#[test]
fn test_detail_budgets() {
    let page = DetailPage::parse(&load_fixture("detail_page.html"));
    assert_eq!(
        page.budget(BudgetSlot::Dinner).as_deref(),
        Some("￥8,000～￥9,999")
    );
    assert_eq!(
        page.budget(BudgetSlot::Lunch).as_deref(),
        Some("￥1,000～￥1,999")
    );
}

#[test]
fn test_detail_counts() {
    let page = DetailPage::parse(&load_fixture("detail_page.html"));
    assert_eq!(page.review_count(), Some(214));
    assert_eq!(page.bookmark_count(), Some(18942));
}

// ============================================================================
// Unrated / sparse detail page tests
// ============================================================================

#[test]
fn test_unrated_score_is_absent_not_zero() {
    let page = DetailPage::parse(&load_fixture("detail_unrated.html"));
    assert_eq!(page.score(), None);
}

#[test]
fn test_unrated_page_still_has_name() {
    let page = DetailPage::parse(&load_fixture("detail_unrated.html"));
    assert_eq!(page.name().as_deref(), Some("立ち飲み たちばな"));
}

#[test]
fn test_sparse_page_optional_fields_absent() {
    let page = DetailPage::parse(&load_fixture("detail_unrated.html"));
    assert_eq!(page.genre(), None);
    assert_eq!(page.budget(BudgetSlot::Lunch), None);
    assert_eq!(page.budget(BudgetSlot::Dinner), None);
    assert_eq!(page.review_count(), None);
    assert_eq!(page.bookmark_count(), None);
}
