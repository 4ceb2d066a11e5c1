//! Configuration for the detector
//!
//! Input layout (delimiter, user columns, header) and evaluation strategy.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the three features are evaluated over one batch + stream input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Fresh graph per feature: replay the batch, then the stream, three times
    #[default]
    Isolated,
    /// One graph and one stream pass; all three verdicts per transaction
    SinglePass,
}

/// Configuration for the Detector
///
/// # Examples
///
/// ```
/// use paymo_antifraud::{DetectorConfig, EvaluationMode};
///
/// let config = DetectorConfig::default();
/// assert_eq!(config.source_field, 1);
/// assert_eq!(config.destination_field, 2);
/// assert_eq!(config.mode, EvaluationMode::Isolated);
///
/// let config = DetectorConfig::from_toml("mode = \"single_pass\"").unwrap();
/// assert_eq!(config.mode, EvaluationMode::SinglePass);
/// assert!(config.has_header);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Evaluation strategy
    /// Default: isolated
    pub mode: EvaluationMode,

    /// Zero-based column of the paying user
    /// Default: 1 (column 0 is the timestamp)
    pub source_field: usize,

    /// Zero-based column of the receiving user
    /// Default: 2
    pub destination_field: usize,

    /// Field delimiter
    /// Default: ','
    pub delimiter: char,

    /// Skip the first line of every input file
    /// Default: true
    pub has_header: bool,

    /// Log and skip malformed lines instead of failing the run
    /// Default: false
    pub skip_malformed: bool,

    /// Log stream progress every N transactions (0 disables)
    /// Default: 0
    pub progress_interval: u64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            mode: EvaluationMode::Isolated,
            source_field: 1,
            destination_field: 2,
            delimiter: ',',
            has_header: true,
            skip_malformed: false,
            progress_interval: 0,
        }
    }
}

impl DetectorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source_field == self.destination_field {
            return Err(ConfigError::Invalid(format!(
                "source_field and destination_field must differ (both {})",
                self.source_field
            )));
        }
        if self.delimiter == '\n' || self.delimiter == '\r' {
            return Err(ConfigError::Invalid(
                "delimiter cannot be a line terminator".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: DetectorConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
