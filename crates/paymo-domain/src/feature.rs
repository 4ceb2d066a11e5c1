//! Feature module - trust thresholds by graph distance

/// A trust feature, defined by the largest graph distance it accepts
///
/// - DirectConnection: the users have transacted before (depth 1)
/// - WithinTwoDegrees: a friend of a friend (depth 2)
/// - WithinFourDegrees: within the fourth-degree network (depth 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    /// Feature 1
    DirectConnection,

    /// Feature 2
    WithinTwoDegrees,

    /// Feature 3
    WithinFourDegrees,
}

impl Feature {
    /// All features in output order
    pub const ALL: [Feature; 3] = [
        Feature::DirectConnection,
        Feature::WithinTwoDegrees,
        Feature::WithinFourDegrees,
    ];

    /// Largest accepted distance, in edges
    pub fn max_depth(&self) -> usize {
        match self {
            Feature::DirectConnection => 1,
            Feature::WithinTwoDegrees => 2,
            Feature::WithinFourDegrees => 4,
        }
    }

    /// One-based feature number, as used for output file naming
    pub fn number(&self) -> usize {
        match self {
            Feature::DirectConnection => 1,
            Feature::WithinTwoDegrees => 2,
            Feature::WithinFourDegrees => 3,
        }
    }

    /// Get the feature name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::DirectConnection => "direct",
            Feature::WithinTwoDegrees => "two-degrees",
            Feature::WithinFourDegrees => "four-degrees",
        }
    }

    /// Parse a feature from its name or number
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "direct" | "1" => Some(Feature::DirectConnection),
            "two-degrees" | "2" => Some(Feature::WithinTwoDegrees),
            "four-degrees" | "3" => Some(Feature::WithinFourDegrees),
            _ => None,
        }
    }

    /// Index into per-feature arrays ordered like [`Feature::ALL`]
    pub fn index(&self) -> usize {
        self.number() - 1
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "feature {} ({})", self.number(), self.as_str())
    }
}

impl std::str::FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feature: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depths_are_increasing() {
        let depths: Vec<usize> = Feature::ALL.iter().map(Feature::max_depth).collect();
        assert_eq!(depths, vec![1, 2, 4]);
    }

    #[test]
    fn test_numbering_matches_index() {
        for (idx, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), idx);
            assert_eq!(feature.number(), idx + 1);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Feature::parse("direct"), Some(Feature::DirectConnection));
        assert_eq!(Feature::parse("3"), Some(Feature::WithinFourDegrees));
        assert_eq!(Feature::parse("Two-Degrees"), Some(Feature::WithinTwoDegrees));
        assert_eq!(Feature::parse("five"), None);
    }
}
