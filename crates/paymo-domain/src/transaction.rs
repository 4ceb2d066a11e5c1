//! Transaction module - a payment between two users

use super::UserId;

/// A payment event between two users
///
/// In the connection model a transaction only contributes an undirected
/// edge; amount, timestamp and message belong to the input format and are
/// dropped by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transaction {
    /// Paying user
    pub source: UserId,

    /// Receiving user
    pub destination: UserId,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(source: impl Into<UserId>, destination: impl Into<UserId>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Both parties as a tuple, source first
    pub fn pair(&self) -> (UserId, UserId) {
        (self.source, self.destination)
    }
}

impl From<(i64, i64)> for Transaction {
    fn from((source, destination): (i64, i64)) -> Self {
        Self::new(source, destination)
    }
}
