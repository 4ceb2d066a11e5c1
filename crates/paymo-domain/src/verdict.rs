//! Verdict module - the per-transaction trust decision

use std::fmt;

/// Outcome reported for a streamed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The parties are within the feature's distance threshold
    Trusted,

    /// The parties are farther apart, or one of them is unknown
    Unverified,
}

impl Verdict {
    /// Map a reachability answer to a verdict
    pub fn from_reachable(reachable: bool) -> Self {
        if reachable {
            Verdict::Trusted
        } else {
            Verdict::Unverified
        }
    }

    /// The literal output token
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Trusted => "trusted",
            Verdict::Unverified => "unverified",
        }
    }

    /// Whether this verdict is `Trusted`
    pub fn is_trusted(&self) -> bool {
        matches!(self, Verdict::Trusted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "trusted" => Ok(Verdict::Trusted),
            "unverified" => Ok(Verdict::Unverified),
            other => Err(format!("Invalid verdict: {}", other)),
        }
    }
}
