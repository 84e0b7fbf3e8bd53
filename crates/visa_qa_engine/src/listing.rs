use scraper::Html;
use visa_qa_core::{normalize_whitespace, ListingEntry};

use crate::dom::{select_all, strip_concat_text};

pub const LISTING_LINK_SELECTOR: &str = "div.list ul li a";

/// Entries of one listing page in document order.
///
/// Listing anchors carry a running number in front of the title; it is
/// stripped. Anchors without `href` are ignored.
pub fn parse_listing(html: &str) -> Vec<ListingEntry> {
    let document = Html::parse_document(html);
    select_all(document.root_element(), LISTING_LINK_SELECTOR)
        .into_iter()
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?.trim();
            if href.is_empty() {
                return None;
            }
            let text = strip_concat_text(anchor);
            let title = normalize_whitespace(text.trim_start_matches(|c: char| c.is_ascii_digit()));
            Some(ListingEntry {
                title,
                url: href.to_string(),
            })
        })
        .collect()
}
