mod cli;
mod run;
mod settings;

use clap::Parser;
use crawl_logging::{crawl_info, LogDestination};
use visa_qa_engine::{CrawlConfig, ReqwestFetcher};

use crate::cli::Cli;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let log_file = cli.log_file.clone().or_else(|| settings.log_file.clone());
    let destination = match log_file {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    crawl_logging::initialize(destination, cli.log_level());

    if settings != Settings::default() {
        crawl_info!("Settings overrides: {:?}", settings);
    }

    let config = settings.apply(CrawlConfig::default());
    let fetcher = ReqwestFetcher::new(config.fetch.clone());

    let targets = cli.targets();
    if targets.is_empty() {
        crawl_info!("Starting batch crawl of {}", config.base_url);
        run::run_batch(fetcher, config).await
    } else {
        run::run_targets(fetcher, config, &targets).await
    }
}
