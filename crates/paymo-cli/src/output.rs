//! Run summary formatting.

use crate::cli::SummaryFormat;
use crate::error::Result;
use paymo_antifraud::DetectorMetrics;

/// Render `metrics` in the requested format. `None` means print nothing.
pub fn format_summary(metrics: &DetectorMetrics, format: SummaryFormat) -> Result<Option<String>> {
    match format {
        SummaryFormat::Text => Ok(Some(metrics.summary())),
        SummaryFormat::Json => Ok(Some(serde_json::to_string_pretty(metrics)?)),
        SummaryFormat::None => Ok(None),
    }
}
