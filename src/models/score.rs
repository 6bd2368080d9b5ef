use std::fmt;

use serde::{Serialize, Serializer};

/// A percentage, shown with two fraction digits.
///
/// Displays and serializes as a string such as `"66.67"`. The value is kept
/// unrounded; rounding happens once, when it is formatted.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f64);

impl Percentage {
    /// Build from a ratio in `[0, 1]`. Non-finite ratios become zero.
    pub fn from_ratio(ratio: f64) -> Self {
        if !ratio.is_finite() {
            return Self(0.0);
        }
        Self(ratio * 100.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of scoring one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub correct: usize,
    pub total: usize,
    #[serde(rename = "comparison")]
    pub comparison_percent: Percentage,
}
