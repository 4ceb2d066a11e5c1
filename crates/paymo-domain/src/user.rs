//! User module - the identity behind every payment

use std::fmt;
use std::str::FromStr;

/// Identifier of a PayMo account
///
/// Users carry no attributes beyond identity. Any integer is a valid
/// identifier, including zero and negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Create a UserId from a raw integer
    ///
    /// # Examples
    ///
    /// ```
    /// use paymo_domain::UserId;
    ///
    /// let id = UserId::new(49466);
    /// assert_eq!(id.value(), 49466);
    /// ```
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = String;

    /// Parse a user field, ignoring surrounding whitespace
    ///
    /// ```
    /// use paymo_domain::UserId;
    ///
    /// let id: UserId = " 8552".parse().unwrap();
    /// assert_eq!(id, UserId::new(8552));
    /// assert!("abc".parse::<UserId>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| format!("Invalid user id '{}': {}", s.trim(), e))
    }
}
