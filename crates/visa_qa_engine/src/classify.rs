use scraper::Html;
use url::Url;
use visa_qa_core::{ContentType, Extraction};

use crate::image::collect_images;
use crate::region::ContentRegion;
use crate::table::transcribe_tables;
use crate::text::extract_text;

/// Uniform extractor signature: `None` means "this modality has no content".
pub type Extractor = fn(&ContentRegion<'_>) -> Option<Vec<String>>;

/// Extractors in precedence order. The first one yielding content decides the
/// page's modality.
pub const EXTRACTORS: [(ContentType, Extractor); 3] = [
    (ContentType::Table, transcribe_tables),
    (ContentType::Text, extract_text),
    (ContentType::Image, collect_images),
];

/// Run `extractors` in order, falling back to [`ContentType::Empty`].
pub fn classify_with(
    region: &ContentRegion<'_>,
    extractors: &[(ContentType, Extractor)],
) -> Extraction {
    extractors
        .iter()
        .find_map(|(content_type, extract)| {
            extract(region).map(|content| Extraction {
                content_type: *content_type,
                content,
            })
        })
        .unwrap_or_else(Extraction::empty)
}

pub fn classify_region(region: &ContentRegion<'_>) -> Extraction {
    classify_with(region, &EXTRACTORS)
}

/// Classify a parsed detail page. `None` when the page has no content region,
/// which is distinct from a region that classifies as empty.
pub fn classify_document(document: &Html, base: &Url) -> Option<Extraction> {
    ContentRegion::locate(document, base).map(|region| classify_region(&region))
}
