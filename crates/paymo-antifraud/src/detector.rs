//! Batch + stream orchestration over a connection graph

use crate::config::{DetectorConfig, EvaluationMode};
use crate::error::{DetectorError, Result};
use crate::feed::CsvFeed;
use crate::metrics::DetectorMetrics;
use crate::sink::LineSink;
use paymo_domain::{Feature, TransactionFeed, Verdict, VerdictSink};
use paymo_graph::ConnectionGraph;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Input and output locations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Historical transactions used to build the initial graph
    pub batch: PathBuf,

    /// Live transactions to judge
    pub stream: PathBuf,

    /// Verdict files, in [`Feature::ALL`] order
    pub outputs: [PathBuf; 3],
}

impl RunPlan {
    /// Create a plan
    pub fn new(batch: impl Into<PathBuf>, stream: impl Into<PathBuf>, outputs: [PathBuf; 3]) -> Self {
        Self {
            batch: batch.into(),
            stream: stream.into(),
            outputs,
        }
    }

    /// Output path for `feature`
    pub fn output(&self, feature: Feature) -> &Path {
        &self.outputs[feature.index()]
    }
}

/// Runs the batch and stream phases and collects metrics
///
/// # Examples
///
/// ```
/// use paymo_antifraud::Detector;
/// use paymo_domain::{Feature, MemoryFeed, Verdict};
///
/// let mut detector = Detector::default_config();
/// let mut graph = detector.build_graph(&mut MemoryFeed::from_pairs(&[(1, 2), (2, 3)])).unwrap();
///
/// let mut verdicts: Vec<Verdict> = Vec::new();
/// let mut stream = MemoryFeed::from_pairs(&[(1, 3), (1, 4)]);
/// detector
///     .evaluate_feature(Feature::WithinTwoDegrees, &mut graph, &mut stream, &mut verdicts)
///     .unwrap();
///
/// assert_eq!(verdicts, vec![Verdict::Trusted, Verdict::Unverified]);
/// ```
pub struct Detector {
    config: DetectorConfig,
    metrics: DetectorMetrics,
}

impl Detector {
    /// Create a new Detector with the given configuration
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            metrics: DetectorMetrics::new(),
        }
    }

    /// Create a Detector with default configuration
    pub fn default_config() -> Self {
        Self::new(DetectorConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &DetectorMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Batch phase: replay every transaction into a fresh graph
    pub fn build_graph<F>(&mut self, batch: &mut F) -> Result<ConnectionGraph>
    where
        F: TransactionFeed,
        F::Error: Into<DetectorError>,
    {
        let mut graph = ConnectionGraph::new();
        self.metrics.batch = Default::default();

        while let Some(transaction) = batch.next_transaction().map_err(Into::into)? {
            let added = graph.record_transaction(&transaction);
            self.metrics.record_batch(added);
        }

        self.metrics.batch.users = graph.user_count();
        info!(
            "Built initial network: {} users, {} edges from {} transactions",
            graph.user_count(),
            graph.edge_count(),
            self.metrics.batch.transactions
        );
        Ok(graph)
    }

    /// Stream phase for one feature: query, emit, then record, per transaction
    pub fn evaluate_feature<F, S>(
        &mut self,
        feature: Feature,
        graph: &mut ConnectionGraph,
        stream: &mut F,
        sink: &mut S,
    ) -> Result<()>
    where
        F: TransactionFeed,
        F::Error: Into<DetectorError>,
        S: VerdictSink,
        S::Error: Into<DetectorError>,
    {
        info!("Processing stream for {}", feature);
        let started = Instant::now();
        let mut processed: u64 = 0;

        while let Some(transaction) = stream.next_transaction().map_err(Into::into)? {
            let verdict = graph.verdict(feature, transaction.source, transaction.destination);
            sink.emit(verdict).map_err(Into::into)?;

            let added = graph.record_transaction(&transaction);
            self.metrics.record_verdict(feature, verdict, added);

            processed += 1;
            self.log_progress(processed);
        }
        sink.finish().map_err(Into::into)?;

        self.finish_feature(feature, graph, started);
        Ok(())
    }

    /// Single-pass stream phase: all three verdicts per transaction from one
    /// bounded traversal, then one record
    pub fn evaluate_all<F, S>(
        &mut self,
        graph: &mut ConnectionGraph,
        stream: &mut F,
        sinks: &mut [S; 3],
    ) -> Result<()>
    where
        F: TransactionFeed,
        F::Error: Into<DetectorError>,
        S: VerdictSink,
        S::Error: Into<DetectorError>,
    {
        info!("Processing stream for all features in one pass");
        let started = Instant::now();
        let deepest = Feature::WithinFourDegrees.max_depth();
        let mut processed: u64 = 0;

        while let Some(transaction) = stream.next_transaction().map_err(Into::into)? {
            let distance =
                graph.distance_within(transaction.source, transaction.destination, deepest);
            let verdicts: Vec<(Feature, Verdict)> = Feature::ALL
                .iter()
                .map(|feature| {
                    let reachable = distance.is_some_and(|d| d <= feature.max_depth());
                    (*feature, Verdict::from_reachable(reachable))
                })
                .collect();

            for (feature, verdict) in &verdicts {
                sinks[feature.index()].emit(*verdict).map_err(Into::into)?;
            }

            let added = graph.record_transaction(&transaction);
            for (feature, verdict) in verdicts {
                self.metrics.record_verdict(feature, verdict, added);
            }

            processed += 1;
            self.log_progress(processed);
        }

        for (feature, sink) in Feature::ALL.iter().zip(sinks.iter_mut()) {
            sink.finish().map_err(Into::into)?;
            self.finish_feature(*feature, graph, started);
        }
        Ok(())
    }

    /// Run all three features over the files in `plan`
    ///
    /// Metrics are reset first, so they describe this run only.
    pub fn run(&mut self, plan: &RunPlan) -> Result<()> {
        self.config.validate()?;
        self.reset_metrics();

        match self.config.mode {
            EvaluationMode::Isolated => {
                for feature in Feature::ALL {
                    info!("Building initial network for {}", feature);
                    let mut batch = self.open_feed(&plan.batch)?;
                    let mut graph = self.build_graph(&mut batch)?;
                    self.metrics.batch.skipped_lines = batch.skipped();

                    let mut stream = self.open_feed(&plan.stream)?;
                    let mut sink = create_sink(plan.output(feature))?;
                    self.evaluate_feature(feature, &mut graph, &mut stream, &mut sink)?;
                    self.metrics.feature_mut(feature).skipped_lines = stream.skipped();
                    info!("Done processing {}", feature);
                }
            }
            EvaluationMode::SinglePass => {
                info!("Building initial network");
                let mut batch = self.open_feed(&plan.batch)?;
                let mut graph = self.build_graph(&mut batch)?;
                self.metrics.batch.skipped_lines = batch.skipped();

                let mut stream = self.open_feed(&plan.stream)?;
                let mut sinks = [
                    create_sink(plan.output(Feature::DirectConnection))?,
                    create_sink(plan.output(Feature::WithinTwoDegrees))?,
                    create_sink(plan.output(Feature::WithinFourDegrees))?,
                ];
                self.evaluate_all(&mut graph, &mut stream, &mut sinks)?;
                for feature in Feature::ALL {
                    self.metrics.feature_mut(feature).skipped_lines = stream.skipped();
                }
                info!("Done processing all features");
            }
        }

        Ok(())
    }

    fn open_feed(&self, path: &Path) -> Result<CsvFeed<BufReader<File>>> {
        CsvFeed::open(path, &self.config).map_err(|source| DetectorError::Open {
            path: path.to_path_buf(),
            source,
        })
    }

    fn finish_feature(&mut self, feature: Feature, graph: &ConnectionGraph, started: Instant) {
        let metrics = self.metrics.feature_mut(feature);
        metrics.final_users = graph.user_count();
        metrics.final_edges = graph.edge_count();
        metrics.elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(
            "{}: {} trusted, {} unverified",
            feature, metrics.trusted, metrics.unverified
        );
    }

    fn log_progress(&self, processed: u64) {
        let interval = self.config.progress_interval;
        if interval > 0 && processed % interval == 0 {
            debug!("Processed {} stream transactions", processed);
        }
    }
}

fn create_sink(path: &Path) -> Result<LineSink<File>> {
    LineSink::create(path).map_err(|source| DetectorError::Open {
        path: path.to_path_buf(),
        source,
    })
}
