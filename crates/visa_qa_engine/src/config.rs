use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchSettings;

pub const DEFAULT_BASE_URL: &str = "https://www.boca.gov.tw";
pub const DEFAULT_LISTING_TEMPLATE: &str = "lp-181-2-{page}-20.html";
/// Placeholder replaced by the 1-based page number in the listing template.
pub const PAGE_PLACEHOLDER: &str = "{page}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Site origin used for listing pages and relative references.
    pub base_url: String,
    /// Listing path relative to `base_url`, with a `{page}` placeholder.
    pub listing_template: String,
    /// Listing pages `1..=pages` are visited.
    pub pages: u32,
    /// Pause after every listing and detail request.
    pub delay: Duration,
    pub state_file: PathBuf,
    pub output_file: PathBuf,
    pub fetch: FetchSettings,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listing_template: DEFAULT_LISTING_TEMPLATE.to_string(),
            pages: 4,
            delay: Duration::from_secs(1),
            state_file: PathBuf::from("boca_visa_state.json"),
            output_file: PathBuf::from("boca_visa_qa.txt"),
            fetch: FetchSettings::default(),
        }
    }
}

impl CrawlConfig {
    /// Listing path for a 1-based page number, still relative to the base url.
    pub fn listing_path(&self, page: u32) -> String {
        self.listing_template
            .replace(PAGE_PLACEHOLDER, &page.to_string())
    }
}
