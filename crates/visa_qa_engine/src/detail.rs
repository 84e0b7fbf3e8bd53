use scraper::Html;
use url::Url;
use visa_qa_core::{detect_category, normalize_whitespace, ParsedDetail};

use crate::classify::classify_document;
use crate::dom::{select_all, strip_concat_text};

pub const TITLE_SELECTOR: &str = "h2.title span";
pub const PUBLISH_INFO_SELECTOR: &str = "ul.publish_info li";

/// Parse a detail page into its Q/A fields.
///
/// A page without a title node is kept and titled by its url; a page without
/// a content region yields `None`.
pub fn parse_detail(html: &str, url: &str, base: &Url) -> Option<ParsedDetail> {
    let document = Html::parse_document(html);
    let extraction = classify_document(&document, base)?;
    let root = document.root_element();

    let title = select_all(root, TITLE_SELECTOR)
        .into_iter()
        .next()
        .map(strip_concat_text)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| normalize_whitespace(url));

    let publish_info = select_all(root, PUBLISH_INFO_SELECTOR)
        .into_iter()
        .map(strip_concat_text)
        .collect();

    Some(ParsedDetail {
        url: url.to_string(),
        category: detect_category(&title),
        title,
        content_type: extraction.content_type,
        content: extraction.content,
        publish_info,
    })
}
