//! PayMo anti-fraud CLI library.
//!
//! Argument parsing, configuration resolution, logging setup and run
//! summaries for the `antifraud` binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use app::run;
pub use cli::{Cli, ModeArg, SummaryFormat};
pub use error::{CliError, Result};
