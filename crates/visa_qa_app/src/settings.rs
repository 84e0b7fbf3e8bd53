//! Optional RON settings file layered over the built-in crawl defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use visa_qa_engine::CrawlConfig;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "visa_qa.ron";

/// Every field is optional; unset fields keep the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub base_url: Option<String>,
    pub listing_template: Option<String>,
    pub pages: Option<u32>,
    pub delay_ms: Option<u64>,
    pub state_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub user_agent: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        ron::from_str(text).context("invalid settings")
    }

    /// Read `explicit` (which must exist) or the default file when present.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_SETTINGS_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings file {path:?}"))?;
        Self::parse(&text).with_context(|| format!("in settings file {path:?}"))
    }

    pub fn apply(&self, mut config: CrawlConfig) -> CrawlConfig {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(template) = &self.listing_template {
            config.listing_template = template.clone();
        }
        if let Some(pages) = self.pages {
            config.pages = pages;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay = Duration::from_millis(delay_ms);
        }
        if let Some(state_file) = &self.state_file {
            config.state_file = state_file.clone();
        }
        if let Some(output_file) = &self.output_file {
            config.output_file = output_file.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            config.fetch.user_agent = user_agent.clone();
        }
        if let Some(secs) = self.request_timeout_secs {
            config.fetch.request_timeout = Duration::from_secs(secs);
        }
        config
    }
}
