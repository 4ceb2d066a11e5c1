//! Metrics collection for detector runs

use paymo_domain::{Feature, Verdict};
use serde::Serialize;

/// Counters for the batch phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchMetrics {
    /// Batch transactions replayed
    pub transactions: usize,

    /// Transactions that created a new edge
    pub new_edges: usize,

    /// Users in the graph after the batch
    pub users: usize,

    /// Malformed lines skipped
    pub skipped_lines: usize,
}

/// Counters for one feature's stream phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureMetrics {
    /// Feature number (1, 2 or 3)
    pub feature: usize,

    /// Largest accepted distance
    pub max_depth: usize,

    /// Transactions judged trusted
    pub trusted: usize,

    /// Transactions judged unverified
    pub unverified: usize,

    /// Stream transactions that created a new edge
    pub new_edges: usize,

    /// Stream transactions between already-connected users
    pub repeat_transactions: usize,

    /// Malformed stream lines skipped
    pub skipped_lines: usize,

    /// Users in the graph after the stream
    pub final_users: usize,

    /// Edges in the graph after the stream
    pub final_edges: usize,

    /// Wall-clock time of the stream phase in milliseconds
    pub elapsed_ms: u64,
}

impl FeatureMetrics {
    fn for_feature(feature: Feature) -> Self {
        Self {
            feature: feature.number(),
            max_depth: feature.max_depth(),
            ..Self::default()
        }
    }

    /// Verdicts emitted
    pub fn total(&self) -> usize {
        self.trusted + self.unverified
    }
}

/// Metrics collected during a detector run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectorMetrics {
    /// Most recent batch replay
    pub batch: BatchMetrics,

    /// Per-feature stream counters, in [`Feature::ALL`] order
    pub features: [FeatureMetrics; 3],
}

impl Default for DetectorMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self {
            batch: BatchMetrics::default(),
            features: Feature::ALL.map(FeatureMetrics::for_feature),
        }
    }

    /// Record one replayed batch transaction
    pub fn record_batch(&mut self, added: bool) {
        self.batch.transactions += 1;
        if added {
            self.batch.new_edges += 1;
        }
    }

    /// Record one streamed transaction for `feature`
    pub fn record_verdict(&mut self, feature: Feature, verdict: Verdict, added: bool) {
        let metrics = self.feature_mut(feature);
        match verdict {
            Verdict::Trusted => metrics.trusted += 1,
            Verdict::Unverified => metrics.unverified += 1,
        }
        if added {
            metrics.new_edges += 1;
        } else {
            metrics.repeat_transactions += 1;
        }
    }

    /// Metrics for one feature
    pub fn feature(&self, feature: Feature) -> &FeatureMetrics {
        &self.features[feature.index()]
    }

    pub(crate) fn feature_mut(&mut self, feature: Feature) -> &mut FeatureMetrics {
        &mut self.features[feature.index()]
    }

    /// Streamed transactions processed by the busiest feature
    pub fn total_streamed(&self) -> usize {
        self.features.iter().map(FeatureMetrics::total).max().unwrap_or(0)
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Anti-Fraud Run Summary".to_string(),
            "======================".to_string(),
            format!(
                "Batch: {} transactions, {} edges, {} users",
                self.batch.transactions, self.batch.new_edges, self.batch.users
            ),
        ];
        if self.batch.skipped_lines > 0 {
            lines.push(format!("  Skipped lines: {}", self.batch.skipped_lines));
        }
        lines.push(String::new());

        for (feature, metrics) in Feature::ALL.iter().zip(&self.features) {
            lines.push(format!("{} (depth <= {}):", feature, metrics.max_depth));
            lines.push(format!("  Trusted: {}", metrics.trusted));
            lines.push(format!("  Unverified: {}", metrics.unverified));
            lines.push(format!(
                "  New edges: {}, repeat transactions: {}",
                metrics.new_edges, metrics.repeat_transactions
            ));
            if metrics.skipped_lines > 0 {
                lines.push(format!("  Skipped lines: {}", metrics.skipped_lines));
            }
            lines.push(format!(
                "  Final graph: {} users, {} edges ({}ms)",
                metrics.final_users, metrics.final_edges, metrics.elapsed_ms
            ));
        }

        lines.join("\n")
    }
}
