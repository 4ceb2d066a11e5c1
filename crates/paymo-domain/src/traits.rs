//! Trait definitions for external interactions
//!
//! These traits define the boundary between the graph engine and the I/O
//! collaborators. File-backed implementations live in `paymo-antifraud`.

use crate::{Transaction, Verdict};
use std::collections::VecDeque;
use std::convert::Infallible;

/// Source of (source, destination) pairs, in input order
///
/// Implemented by the CSV reader for batch and stream files.
pub trait TransactionFeed {
    /// Error type for feed operations
    type Error;

    /// Read the next transaction, or `None` at end of input
    fn next_transaction(&mut self) -> Result<Option<Transaction>, Self::Error>;
}

/// Consumer of one verdict per streamed transaction, in input order
pub trait VerdictSink {
    /// Error type for sink operations
    type Error;

    /// Emit a single verdict
    fn emit(&mut self, verdict: Verdict) -> Result<(), Self::Error>;

    /// Flush anything buffered. Called once after the last verdict.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// In-memory feed over a fixed list of transactions
#[derive(Debug, Clone, Default)]
pub struct MemoryFeed {
    pending: VecDeque<Transaction>,
}

impl MemoryFeed {
    /// Create a feed that yields `transactions` in order
    pub fn new(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        Self {
            pending: transactions.into_iter().collect(),
        }
    }

    /// Build a feed from raw `(source, destination)` pairs
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Self {
        Self::new(pairs.iter().copied().map(Transaction::from))
    }

    /// Transactions not yet read
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl TransactionFeed for MemoryFeed {
    type Error = Infallible;

    fn next_transaction(&mut self) -> Result<Option<Transaction>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

impl VerdictSink for Vec<Verdict> {
    type Error = Infallible;

    fn emit(&mut self, verdict: Verdict) -> Result<(), Self::Error> {
        self.push(verdict);
        Ok(())
    }
}
