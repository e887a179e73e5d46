//! Detail page field extraction
//!
//! A parsed detail document with one extraction method per field. Every
//! method returns `Option`: a missing element yields `None` and never an
//! error, so one absent field cannot block the others.

use scraper::{ElementRef, Html};

use crate::parser::selectors;

/// Meal slot for budget extraction, matched against the entry icon label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSlot {
    Lunch,
    Dinner,
}

impl BudgetSlot {
    /// `aria-label` value used by the budget entry icon
    #[must_use]
    pub fn aria_label(&self) -> &'static str {
        match self {
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

/// One parsed restaurant detail page
pub struct DetailPage {
    document: Html,
}

impl DetailPage {
    /// Parse a detail page body
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Establishment name from the primary heading
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.document
            .select(&selectors::DISPLAY_NAME)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
    }

    /// First tag chip in the cell next to the genre label row
    #[must_use]
    pub fn genre(&self) -> Option<String> {
        let label = self
            .document
            .select(&selectors::TABLE_HEADER)
            .find(|th| element_text(*th) == "ジャンル")?;

        let cell = label
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "td")?;

        cell.select(&selectors::TAG_CHIP)
            .next()
            .map(element_text)
            .filter(|text| !text.is_empty())
    }

    /// Rating score; `None` when the element is missing or the text is the
    /// unrated placeholder `-`
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        let text = self
            .document
            .select(&selectors::RATING_VALUE)
            .next()
            .map(element_text)?;

        if text == "-" {
            return None;
        }

        parse_number(&text, "score")
    }

    /// Budget text for the given meal slot
    #[must_use]
    pub fn budget(&self, slot: BudgetSlot) -> Option<String> {
        for entry in self.document.select(&selectors::BUDGET_ENTRY) {
            let Some(icon) = entry.select(&selectors::BUDGET_ICON).next() else {
                continue;
            };
            if icon.value().attr("aria-label") != Some(slot.aria_label()) {
                continue;
            }
            return entry
                .select(&selectors::BUDGET_AMOUNT)
                .next()
                .map(element_text)
                .filter(|text| !text.is_empty());
        }
        None
    }

    /// Review count from the rating header block
    #[must_use]
    pub fn review_count(&self) -> Option<u32> {
        self.document
            .select(&selectors::REVIEW_COUNT)
            .next()
            .map(element_text)
            .and_then(|text| parse_number(&text, "review_count"))
    }

    /// Bookmark count from the rating header block
    #[must_use]
    pub fn bookmark_count(&self) -> Option<u32> {
        self.document
            .select(&selectors::BOOKMARK_COUNT)
            .next()
            .map(element_text)
            .and_then(|text| parse_number(&text, "bookmark_count"))
    }
}

/// Collected, trimmed text content of an element
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parse a numeric field, degrading to `None` on malformed text
fn parse_number<T: std::str::FromStr>(text: &str, field: &str) -> Option<T> {
    match text.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(field, text, "non-numeric text in numeric field");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_HTML: &str = r#"
        <h2 class="display-name"><span>鮨 さいとう</span></h2>
        <table>
          <tr><th>ジャンル</th><td><span>寿司</span><span>日本料理</span></td></tr>
          <tr><th>予約可否</th><td><span>完全予約制</span></td></tr>
        </table>
        <b class="c-rating__val"><span>4.51</span></b>
        <div class="rdheader-budget">
          <p><i aria-label="Dinner"></i><span>￥30,000～￥39,999</span></p>
          <p><i aria-label="Lunch"></i><span>￥20,000～￥29,999</span></p>
        </div>
        <div class="rdheader-rating__review"><em class="num">512</em></div>
        <div class="rdheader-rating__hozon"><em class="num">48213</em></div>
    "#;

    #[test]
    fn test_name() {
        let page = DetailPage::parse(DETAIL_HTML);
        assert_eq!(page.name().as_deref(), Some("鮨 さいとう"));
    }

    #[test]
    fn test_genre_takes_first_chip_of_genre_row() {
        let page = DetailPage::parse(DETAIL_HTML);
        assert_eq!(page.genre().as_deref(), Some("寿司"));
    }

    #[test]
    fn test_score() {
        let page = DetailPage::parse(DETAIL_HTML);
        assert_eq!(page.score(), Some(4.51));
    }

    #[test]
    fn test_unrated_placeholder_is_absent_not_zero() {
        let page = DetailPage::parse(r#"<b class="c-rating__val"><span>-</span></b>"#);
        assert_eq!(page.score(), None);
    }

    #[test]
    fn test_malformed_score_degrades_to_absent() {
        let page = DetailPage::parse(r#"<b class="c-rating__val"><span>n/a</span></b>"#);
        assert_eq!(page.score(), None);
    }

    #[test]
    fn test_budget_slots() {
        let page = DetailPage::parse(DETAIL_HTML);
        assert_eq!(
            page.budget(BudgetSlot::Dinner).as_deref(),
            Some("￥30,000～￥39,999")
        );
        assert_eq!(
            page.budget(BudgetSlot::Lunch).as_deref(),
            Some("￥20,000～￥29,999")
        );
    }

    #[test]
    fn test_budget_missing_block() {
        let page = DetailPage::parse("<div>no budget</div>");
        assert_eq!(page.budget(BudgetSlot::Lunch), None);
        assert_eq!(page.budget(BudgetSlot::Dinner), None);
    }

    #[test]
    fn test_budget_entry_without_icon_is_skipped() {
        let html = r#"
            <div class="rdheader-budget">
              <p><span>￥1,000</span></p>
              <p><i aria-label="Lunch"></i><span>￥2,000～￥2,999</span></p>
            </div>
        "#;
        let page = DetailPage::parse(html);
        assert_eq!(page.budget(BudgetSlot::Lunch).as_deref(), Some("￥2,000～￥2,999"));
    }

    #[test]
    fn test_counts() {
        let page = DetailPage::parse(DETAIL_HTML);
        assert_eq!(page.review_count(), Some(512));
        assert_eq!(page.bookmark_count(), Some(48213));
    }

    #[test]
    fn test_missing_count_blocks() {
        let page = DetailPage::parse("<div>empty</div>");
        assert_eq!(page.review_count(), None);
        assert_eq!(page.bookmark_count(), None);
    }

    #[test]
    fn test_missing_genre_row() {
        let page = DetailPage::parse("<table><tr><th>住所</th><td>東京都</td></tr></table>");
        assert_eq!(page.genre(), None);
    }

    #[test]
    fn test_every_field_absent_on_unrelated_page() {
        let page = DetailPage::parse("<html><body><p>maintenance</p></body></html>");
        assert!(page.name().is_none());
        assert!(page.genre().is_none());
        assert!(page.score().is_none());
        assert!(page.review_count().is_none());
        assert!(page.bookmark_count().is_none());
    }
}
