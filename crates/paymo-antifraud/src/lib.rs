//! PayMo Anti-Fraud
//!
//! Flags streamed payments as `trusted` or `unverified` from the distance
//! between payer and payee in the network of past transactions.
//!
//! # Overview
//!
//! The crate wires the graph engine to its collaborators:
//!
//! ```text
//! batch file  → CsvFeed → Detector::build_graph → ConnectionGraph
//! stream file → CsvFeed → Detector::evaluate_feature → LineSink (one per feature)
//! ```
//!
//! Each streamed transaction is judged first and recorded afterwards, so it
//! becomes an edge for every later transaction regardless of its verdict.
//!
//! | Feature | Trusted when the users are | Depth |
//! |---------|----------------------------|-------|
//! | 1 | direct contacts | 1 |
//! | 2 | friends of friends | 2 |
//! | 3 | within the fourth-degree network | 4 |
//!
//! # Evaluation modes
//!
//! - **Isolated** (default): every feature gets its own graph built from the
//!   batch, followed by its own pass over the stream
//! - **Single pass**: one graph, one stream pass, one bounded traversal per
//!   transaction feeding all three outputs
//!
//! Both modes write identical outputs, since recording never depends on a
//! verdict.
//!
//! # Usage
//!
//! ```no_run
//! use paymo_antifraud::{Detector, DetectorConfig, RunPlan};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut detector = Detector::new(DetectorConfig::default());
//! let plan = RunPlan::new(
//!     "paymo_input/batch_payment.txt",
//!     "paymo_input/stream_payment.txt",
//!     [
//!         "paymo_output/output1.txt".into(),
//!         "paymo_output/output2.txt".into(),
//!         "paymo_output/output3.txt".into(),
//!     ],
//! );
//! detector.run(&plan)?;
//! println!("{}", detector.metrics().summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! mode = "isolated"
//! source_field = 1
//! destination_field = 2
//! delimiter = ","
//! has_header = true
//! skip_malformed = false
//! progress_interval = 0
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod error;
mod feed;
mod metrics;
mod sink;

pub use config::{DetectorConfig, EvaluationMode};
pub use detector::{Detector, RunPlan};
pub use error::{ConfigError, DetectorError, FeedError, ParseError, Result};
pub use feed::{parse_record, CsvFeed, RecordLayout};
pub use metrics::{BatchMetrics, DetectorMetrics, FeatureMetrics};
pub use sink::LineSink;
