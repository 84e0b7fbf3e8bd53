use std::path::PathBuf;

use anyhow::Context;
use crawl_logging::{crawl_info, crawl_warn};
use visa_qa_engine::{export_changed_set, load_state, save_state, CrawlConfig, Crawler, Fetcher};

/// Unattended batch: diff the whole listing against the state file, export
/// the changed records, then persist the new state.
///
/// State is written last; a failed crawl or export leaves the previous state
/// file as it was, so the same changes are reported again on the next run.
pub async fn run_batch<F: Fetcher>(fetcher: F, config: CrawlConfig) -> anyhow::Result<()> {
    let state_file = config.state_file.clone();
    let output_file = config.output_file.clone();

    let mut state = load_state(&state_file)
        .with_context(|| format!("failed to load state from {state_file:?}"))?;
    let crawler = Crawler::new(fetcher, config)?;

    let summary = crawler.run_batch(&mut state).await.context("crawl aborted")?;

    export_changed_set(&output_file, &summary.changed)
        .with_context(|| format!("failed to write export {output_file:?}"))?;
    save_state(&state_file, &state)
        .with_context(|| format!("failed to save state to {state_file:?}"))?;
    Ok(())
}

/// Ad hoc re-extraction of explicit pages, one export file each.
pub async fn run_targets<F: Fetcher>(
    fetcher: F,
    config: CrawlConfig,
    targets: &[(String, PathBuf)],
) -> anyhow::Result<()> {
    let crawler = Crawler::new(fetcher, config)?;
    for (url, output) in targets {
        let written = crawler
            .run_target(url, output)
            .await
            .with_context(|| format!("failed to extract {url}"))?;
        if written.is_none() {
            crawl_warn!("{} has no content region; {:?} not written", url, output);
        }
    }
    crawl_info!("Processed {} target(s)", targets.len());
    Ok(())
}
