//! Top-level run sequence.

use crate::cli::Cli;
use crate::config;
use crate::error::Result;
use crate::output::format_summary;
use paymo_antifraud::{Detector, RunPlan};
use tracing::info;

/// Run the detector for one invocation and return the rendered summary.
pub fn run(cli: &Cli) -> Result<Option<String>> {
    let plan = RunPlan::new(&cli.batch, &cli.stream, cli.outputs());
    let mut detector = Detector::new(config::resolve(cli)?);
    info!("Evaluation mode: {:?}", detector.config().mode);
    detector.run(&plan)?;

    info!("Done overall");
    format_summary(detector.metrics(), cli.summary)
}
