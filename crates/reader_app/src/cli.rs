use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;

use crate::logging::LogDestination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ForcedMode {
    On,
    Off,
}

impl ForcedMode {
    pub fn is_active(self) -> bool {
        self == ForcedMode::On
    }
}

/// Render an HTML page in reading mode, or restore it, and write the result.
#[derive(Debug, Parser)]
#[command(name = "reader", version, about)]
pub struct Args {
    /// HTML file to load as the live document.
    pub input: PathBuf,

    /// Where to write the resulting document (stdout when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// RON file holding the persisted reading-mode preference.
    #[arg(long)]
    pub prefs: Option<PathBuf>,

    /// Flip the mode once per occurrence, after boot.
    #[arg(short, long, action = ArgAction::Count)]
    pub toggle: u8,

    /// Force a final mode after boot and toggles.
    #[arg(long, value_enum)]
    pub force: Option<ForcedMode>,

    /// Content-Type header value to use when decoding the input.
    #[arg(long)]
    pub content_type: Option<String>,

    /// Base URL for resolving relative image sources.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Override the minimum text length a candidate needs to be scored.
    #[arg(long)]
    pub min_text_len: Option<usize>,

    /// Print an extraction summary as JSON to stderr.
    #[arg(long)]
    pub report: bool,

    /// Also write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::Both(path.clone()),
            None => LogDestination::Terminal,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
