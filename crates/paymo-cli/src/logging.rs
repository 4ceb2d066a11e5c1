//! Tracing subscriber setup.

use crate::error::{CliError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, logging to stderr.
///
/// An explicit `filter` wins over `RUST_LOG`; with neither, `info` is used.
pub fn init(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| CliError::Logging(format!("Invalid log filter '{}': {}", directives, e)))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
