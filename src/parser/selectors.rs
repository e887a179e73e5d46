//! CSS selectors for Tabelog listing and detail pages
//!
//! The listing and detail layouts are fixed, known structures for one site
//! family, so the selectors are parsed once and shared.

use lazy_static::lazy_static;
use scraper::Selector;

// Helper macro to parse selectors safely at startup
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

lazy_static! {
    /// Restaurant-name anchors on a listing page
    pub static ref RESTAURANT_LINK: Selector = parse_selector!("a.list-rst__rst-name-target");

    /// Establishment name heading on a detail page
    pub static ref DISPLAY_NAME: Selector = parse_selector!("h2.display-name");

    /// Table header cells; the genre row is found by its label text
    pub static ref TABLE_HEADER: Selector = parse_selector!("th");

    /// First tag chip inside the genre cell
    pub static ref TAG_CHIP: Selector = parse_selector!("span");

    /// Rating value text
    pub static ref RATING_VALUE: Selector = parse_selector!("b.c-rating__val span");

    /// Per-slot entries inside the budget block
    pub static ref BUDGET_ENTRY: Selector = parse_selector!(".rdheader-budget p");

    /// Meal-slot icon inside a budget entry
    pub static ref BUDGET_ICON: Selector = parse_selector!("i");

    /// Budget amount text inside a budget entry
    pub static ref BUDGET_AMOUNT: Selector = parse_selector!("span");

    /// Review count number
    pub static ref REVIEW_COUNT: Selector = parse_selector!(".rdheader-rating__review em.num");

    /// Bookmark count number
    pub static ref BOOKMARK_COUNT: Selector = parse_selector!(".rdheader-rating__hozon em.num");
}
