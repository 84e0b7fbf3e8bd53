use std::path::Path;

use crawl_logging::{crawl_debug, crawl_info, crawl_warn};
use url::Url;
use visa_qa_core::{absolute_url, Decision, DetailRecord, ListingEntry, ParsedDetail, StateStore};

use crate::config::CrawlConfig;
use crate::decode::decode_html;
use crate::detail::parse_detail;
use crate::export::{export_single, ExportSummary};
use crate::fetch::Fetcher;
use crate::listing::parse_listing;
use crate::CrawlError;

/// What one batch pass saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Listing entries visited.
    pub listed: usize,
    /// Pages without a content region.
    pub skipped: usize,
    /// Pages whose fingerprint matched the stored one.
    pub unchanged: usize,
    /// New or changed records, in processing order.
    pub changed: Vec<DetailRecord>,
}

/// Sequential crawler: one request in flight, a fixed pause after each.
pub struct Crawler<F: Fetcher> {
    fetcher: F,
    config: CrawlConfig,
    base: Url,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Result<Self, CrawlError> {
        let base = Url::parse(&config.base_url).map_err(|err| CrawlError::InvalidBaseUrl {
            url: config.base_url.clone(),
            message: err.to_string(),
        })?;
        Ok(Self {
            fetcher,
            config,
            base,
        })
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Fetch and decode one page into text.
    pub async fn fetch_page(&self, url: &str) -> Result<String, CrawlError> {
        let output = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|source| CrawlError::Fetch {
                url: url.to_string(),
                source,
            })?;
        let decoded = decode_html(&output.bytes, output.metadata.content_type.as_deref())
            .map_err(|source| CrawlError::Decode {
                url: url.to_string(),
                source,
            })?;
        crawl_debug!("{} decoded as {}", url, decoded.encoding_label);
        Ok(decoded.html)
    }

    /// Entries of every configured listing page, in page order.
    pub async fn collect_listing(&self) -> Result<Vec<ListingEntry>, CrawlError> {
        let mut entries = Vec::new();
        for page in 1..=self.config.pages {
            let url = absolute_url(&self.base, &self.config.listing_path(page));
            crawl_info!("Fetching list page {}", page);
            let html = self.fetch_page(&url).await?;
            let found = parse_listing(&html);
            crawl_debug!("list page {} yielded {} entries", page, found.len());
            entries.extend(found);
            self.pause().await;
        }
        Ok(entries)
    }

    /// Fetch and parse one detail page. `reference` may be relative.
    pub async fn fetch_detail(&self, reference: &str) -> Result<Option<ParsedDetail>, CrawlError> {
        let url = absolute_url(&self.base, reference);
        let html = self.fetch_page(&url).await?;
        let parsed = parse_detail(&html, &url, &self.base);
        if parsed.is_none() {
            crawl_warn!("No content region on {}; skipping", url);
        }
        Ok(parsed)
    }

    /// One full pass over the listing, reconciled against `state`.
    ///
    /// `state` is only updated when the whole pass succeeds; on error it is
    /// left exactly as it was passed in.
    pub async fn run_batch(&self, state: &mut StateStore) -> Result<CrawlSummary, CrawlError> {
        let entries = self.collect_listing().await?;
        let mut working = state.clone();
        let mut summary = CrawlSummary {
            listed: entries.len(),
            ..CrawlSummary::default()
        };

        for entry in &entries {
            let parsed = self.fetch_detail(&entry.url).await?;
            self.pause().await;

            let Some(page) = parsed else {
                summary.skipped += 1;
                continue;
            };

            match working.reconcile(page) {
                Decision::Unchanged => summary.unchanged += 1,
                Decision::Changed(record) => {
                    crawl_info!("Updated: {}", record.title);
                    summary.changed.push(record);
                }
            }
        }

        *state = working;
        crawl_info!(
            "Batch done: {} listed, {} changed, {} unchanged, {} skipped",
            summary.listed,
            summary.changed.len(),
            summary.unchanged,
            summary.skipped
        );
        Ok(summary)
    }

    /// Re-extract one page straight into `output`, bypassing state.
    ///
    /// Returns `None` (and writes nothing) when the page has no content region.
    pub async fn run_target(
        &self,
        url: &str,
        output: &Path,
    ) -> Result<Option<ExportSummary>, CrawlError> {
        crawl_info!("Fetching custom page: {}", url);
        let Some(page) = self.fetch_detail(url).await? else {
            return Ok(None);
        };
        let hash = page.fingerprint();
        let record = page.into_record(hash);
        Ok(Some(export_single(output, &record)?))
    }

    async fn pause(&self) {
        if !self.config.delay.is_zero() {
            tokio::time::sleep(self.config.delay).await;
        }
    }
}
