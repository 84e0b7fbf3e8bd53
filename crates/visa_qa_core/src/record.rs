use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::fingerprint::fingerprint;

/// Content modality of a detail page. Exactly one applies per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Table,
    Text,
    Image,
    Empty,
}

impl ContentType {
    pub fn tag(self) -> &'static str {
        match self {
            ContentType::Table => "table",
            ContentType::Text => "text",
            ContentType::Image => "image",
            ContentType::Empty => "empty",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classified body of a page: the chosen modality and its canonical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub content_type: ContentType,
    pub content: Vec<String>,
}

impl Extraction {
    pub fn empty() -> Self {
        Self {
            content_type: ContentType::Empty,
            content: Vec::new(),
        }
    }
}

/// One anchor of the paginated listing. `url` may still be relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub url: String,
}

/// Everything a detail page yields before fingerprinting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDetail {
    pub url: String,
    pub title: String,
    pub category: Category,
    pub content_type: ContentType,
    pub content: Vec<String>,
    pub publish_info: Vec<String>,
}

impl ParsedDetail {
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.title, self.content_type, &self.content)
    }

    /// Seal the page into a record carrying the given fingerprint.
    pub fn into_record(self, hash: String) -> DetailRecord {
        DetailRecord {
            title: self.title,
            category: self.category,
            content_type: self.content_type,
            content: self.content,
            publish_info: self.publish_info,
            url: self.url,
            hash,
        }
    }
}

/// Persisted Q/A record, keyed by `url` in the state file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub title: String,
    pub category: Category,
    pub content_type: ContentType,
    pub content: Vec<String>,
    #[serde(default)]
    pub publish_info: Vec<String>,
    pub url: String,
    pub hash: String,
}

impl DetailRecord {
    /// First publish-info entry carrying the publication date marker.
    pub fn publish_date(&self) -> Option<&str> {
        const DATE_MARKER: &str = "發布日期";
        self.publish_info
            .iter()
            .find(|info| info.contains(DATE_MARKER))
            .map(String::as_str)
    }
}
