//! PayMo Graph
//!
//! The incremental social-graph engine behind the anti-fraud features.
//!
//! # Overview
//!
//! [`ConnectionGraph`] is an undirected, unweighted graph of users who have
//! paid each other. It is built by replaying a batch of historical
//! transactions and then, for every streamed transaction, queried and
//! updated in that order:
//!
//! ```text
//! is_within_depth(k)? → verdict → record(pair)
//! ```
//!
//! Edges are only ever added, so every reachability answer is monotonic
//! over the life of one graph.
//!
//! # Example
//!
//! ```
//! use paymo_graph::ConnectionGraph;
//! use paymo_domain::UserId;
//!
//! let (a, b, c) = (UserId::new(1), UserId::new(2), UserId::new(3));
//! let mut graph = ConnectionGraph::new();
//! assert!(graph.record(a, b));
//! assert!(graph.record(b, c));
//!
//! assert!(!graph.is_directly_connected(a, c));
//! assert!(graph.is_within_depth2(a, c));
//! ```

#![warn(missing_docs)]

mod graph;

pub use graph::ConnectionGraph;
