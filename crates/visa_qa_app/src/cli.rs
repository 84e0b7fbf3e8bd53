use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "visa-qa",
    about = "Crawl the BOCA visa FAQ and export Q/A records that changed since the last run"
)]
pub struct Cli {
    /// RON settings file (default: ./visa_qa.ron when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write the log to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Re-extract one page into its own file, bypassing state; repeatable
    #[arg(
        long,
        num_args = 2,
        value_names = ["URL", "OUTPUT_TXT"],
        action = ArgAction::Append
    )]
    target: Vec<String>,
}

impl Cli {
    /// `(url, output)` pairs in the order given.
    pub fn targets(&self) -> Vec<(String, PathBuf)> {
        self.target
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), PathBuf::from(&pair[1])))
            .collect()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
