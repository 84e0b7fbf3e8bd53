//! Visa Q/A core: data model, text normalisation, categorisation and
//! fingerprint-based change detection. Pure, no IO.
mod category;
mod fingerprint;
mod normalize;
mod record;
mod state;
mod urls;

pub use category::{detect_category, Category};
pub use fingerprint::{fingerprint, FIELD_DELIMITER};
pub use normalize::normalize_whitespace;
pub use record::{ContentType, DetailRecord, Extraction, ListingEntry, ParsedDetail};
pub use state::{Decision, StateError, StateStore};
pub use urls::absolute_url;
