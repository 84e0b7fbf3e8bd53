use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::dom::select_all;

/// Structural marker of the body container on a detail page.
pub const CONTENT_REGION_SELECTOR: &str = "section.cp";

/// The single container holding a detail page's substantive body, paired with
/// the origin used to absolutise its references.
#[derive(Debug, Clone, Copy)]
pub struct ContentRegion<'a> {
    element: ElementRef<'a>,
    base: &'a Url,
}

impl<'a> ContentRegion<'a> {
    /// First `section.cp` of the document, if the page has one.
    pub fn locate(document: &'a Html, base: &'a Url) -> Option<Self> {
        let selector = Selector::parse(CONTENT_REGION_SELECTOR).ok()?;
        document
            .select(&selector)
            .next()
            .map(|element| Self { element, base })
    }

    pub fn element(&self) -> ElementRef<'a> {
        self.element
    }

    pub fn base(&self) -> &'a Url {
        self.base
    }

    pub(crate) fn select(&self, css: &str) -> Vec<ElementRef<'a>> {
        select_all(self.element, css)
    }
}
