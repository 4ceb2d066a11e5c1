//! PayMo Domain Layer
//!
//! Core vocabulary for the PayMo anti-fraud system. This crate has no
//! external dependencies and defines the value types and boundary traits
//! that the graph engine and the I/O collaborators share.
//!
//! ## Key Concepts
//!
//! - **User**: an opaque integer identity, nothing more
//! - **Transaction**: a payment between two users; contributes one undirected edge
//! - **Feature**: a trust threshold expressed as a maximum graph distance
//! - **Verdict**: `trusted` or `unverified`, one per streamed transaction
//!
//! ## Architecture
//!
//! ```text
//! TransactionFeed → ConnectionGraph (query, then record) → VerdictSink
//! ```
//!
//! Feeds and sinks are traits so that file-backed and in-memory
//! implementations are interchangeable.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod feature;
pub mod traits;
pub mod transaction;
pub mod user;
pub mod verdict;

// Re-exports for convenience
pub use feature::Feature;
pub use traits::{MemoryFeed, TransactionFeed, VerdictSink};
pub use transaction::Transaction;
pub use user::UserId;
pub use verdict::Verdict;
