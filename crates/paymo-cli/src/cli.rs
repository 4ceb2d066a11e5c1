//! CLI argument parsing.

use clap::Parser;
use paymo_antifraud::EvaluationMode;
use std::path::PathBuf;

/// PayMo anti-fraud: flag streamed payments as trusted or unverified.
///
/// Writes one verdict per stream transaction to each output file:
/// OUTPUT1 for direct contacts, OUTPUT2 for friends of friends, OUTPUT3 for
/// the fourth-degree network.
#[derive(Debug, Parser)]
#[command(name = "antifraud")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Batch payment file used to build the initial network
    pub batch: PathBuf,

    /// Stream payment file to judge
    pub stream: PathBuf,

    /// Verdicts for feature 1 (direct contacts)
    pub output1: PathBuf,

    /// Verdicts for feature 2 (friends of friends)
    pub output2: PathBuf,

    /// Verdicts for feature 3 (fourth-degree network)
    pub output3: PathBuf,

    /// Configuration file path (TOML)
    #[arg(short, long, env = "ANTIFRAUD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Evaluation mode (overrides the config file)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Skip malformed lines instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// Log progress every N stream transactions (at debug level)
    #[arg(long)]
    pub progress_interval: Option<u64>,

    /// Log filter, e.g. "info" or "paymo_antifraud=debug" (defaults to RUST_LOG, then info)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Run summary printed to stdout
    #[arg(short, long, value_enum, default_value = "text")]
    pub summary: SummaryFormat,
}

/// Evaluation mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Fresh graph per feature
    Isolated,
    /// One graph, one pass for all features
    SinglePass,
}

/// Summary format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    /// Human-readable report (default)
    Text,
    /// JSON metrics
    Json,
    /// No summary
    None,
}

impl From<ModeArg> for EvaluationMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Isolated => EvaluationMode::Isolated,
            ModeArg::SinglePass => EvaluationMode::SinglePass,
        }
    }
}

impl Cli {
    /// Output paths in feature order.
    pub fn outputs(&self) -> [PathBuf; 3] {
        [self.output1.clone(), self.output2.clone(), self.output3.clone()]
    }
}
