//! HTML parsing and data extraction
//!
//! This module handles parsing Tabelog listing and detail pages and
//! extracting structured restaurant data.

pub mod detail;
pub mod listing;
pub mod selectors;

pub use detail::{BudgetSlot, DetailPage};
pub use listing::extract_restaurant_links;
