use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{DetailRecord, ParsedDetail};

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of comparing a freshly parsed page with the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Same fingerprint as last time; the stored record was left untouched.
    Unchanged,
    /// New url or new fingerprint; the record now stored for the url.
    Changed(DetailRecord),
}

/// Last-seen record per detail-page url.
///
/// Owned by one batch run: loaded before the crawl, updated as pages are
/// reconciled, persisted after the full pass. Urls that drop out of the
/// listing are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateStore {
    entries: BTreeMap<String, DetailRecord>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Pretty-printed JSON with two-space indent; non-ASCII text is kept as is.
    pub fn to_json_pretty(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn get(&self, url: &str) -> Option<&DetailRecord> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DetailRecord> {
        self.entries.values()
    }

    /// Fingerprint `page` and record it if its content is new or changed.
    pub fn reconcile(&mut self, page: ParsedDetail) -> Decision {
        let hash = page.fingerprint();
        if let Some(previous) = self.entries.get(&page.url) {
            if previous.hash == hash {
                return Decision::Unchanged;
            }
        }

        let record = page.into_record(hash);
        self.entries.insert(record.url.clone(), record.clone());
        Decision::Changed(record)
    }
}
