//! Error types for feed parsing and detector runs

use std::convert::Infallible;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A transaction line that could not be turned into a user pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Line has fewer fields than the configured user columns need
    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingField {
        /// 1-based line number, header included
        line: usize,
        /// Minimum field count required
        expected: usize,
        /// Fields actually present
        found: usize,
    },

    /// A user column does not hold an integer
    #[error("line {line}: field {field} is not a user id: '{value}'")]
    InvalidUser {
        /// 1-based line number, header included
        line: usize,
        /// Zero-based field index
        field: usize,
        /// Offending text, trimmed
        value: String,
    },
}

/// Errors raised while reading a transaction feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// Underlying reader failed
    #[error("I/O error reading transactions: {0}")]
    Io(#[from] io::Error),

    /// Malformed record
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Values parsed but are not usable together
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur during a detector run
#[derive(Error, Debug)]
pub enum DetectorError {
    /// Input or output file could not be opened
    #[error("Cannot open {}: {source}", .path.display())]
    Open {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Reading batch or stream transactions failed
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Writing verdicts failed
    #[error("Output error: {0}")]
    Sink(#[from] io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<Infallible> for DetectorError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<ParseError> for DetectorError {
    fn from(e: ParseError) -> Self {
        DetectorError::Feed(FeedError::Parse(e))
    }
}

/// Result type alias for detector operations
pub type Result<T> = std::result::Result<T, DetectorError>;
