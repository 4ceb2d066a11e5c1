//! Configuration resolution for the CLI.
//!
//! Starts from the config file when one is given (or defaults otherwise)
//! and applies command-line overrides on top.

use crate::cli::Cli;
use crate::error::Result;
use paymo_antifraud::DetectorConfig;

/// Build the detector configuration for this invocation.
pub fn resolve(cli: &Cli) -> Result<DetectorConfig> {
    let mut config = match &cli.config {
        Some(path) => DetectorConfig::from_file(path)?,
        None => DetectorConfig::default(),
    };

    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if cli.skip_malformed {
        config.skip_malformed = true;
    }
    if let Some(interval) = cli.progress_interval {
        config.progress_interval = interval;
    }

    config.validate()?;
    Ok(config)
}
