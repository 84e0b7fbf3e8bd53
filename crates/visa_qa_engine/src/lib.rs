//! Visa Q/A engine: fetching, content classification, persistence and export.
mod classify;
mod config;
mod crawler;
mod decode;
mod detail;
mod dom;
mod export;
mod fetch;
mod image;
mod list;
mod listing;
mod persist;
mod region;
mod table;
mod text;
mod types;

pub use classify::{classify_document, classify_region, classify_with, Extractor, EXTRACTORS};
pub use config::{CrawlConfig, DEFAULT_BASE_URL, DEFAULT_LISTING_TEMPLATE, PAGE_PLACEHOLDER};
pub use crawler::{CrawlSummary, Crawler};
pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use detail::{parse_detail, PUBLISH_INFO_SELECTOR, TITLE_SELECTOR};
pub use export::{
    export_changed_set, export_single, render_changed_set, render_record, ExportError,
    ExportSummary,
};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_USER_AGENT};
pub use image::collect_images;
pub use list::{flatten_list, BULLET, INDENT_UNIT};
pub use listing::{parse_listing, LISTING_LINK_SELECTOR};
pub use persist::{ensure_output_dir, load_state, save_state, AtomicFileWriter, PersistError};
pub use region::{ContentRegion, CONTENT_REGION_SELECTOR};
pub use table::{transcribe_tables, COLUMN_SEPARATOR, HEADER_SEPARATOR};
pub use text::extract_text;
pub use types::{CrawlError, FailureKind, FetchError, FetchMetadata, FetchOutput};
