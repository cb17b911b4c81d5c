//! Qualitative classification of ratio values.
//!
//! A [`ThresholdTable`] is an ordered list of [`Rule`]s. Classification walks
//! the rules top-down and returns the label of the first rule whose [`Bound`]
//! admits the value. The last rule of every table should be
//! [`Bound::Otherwise`] so that every finite value lands in exactly one bucket.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Qualitative bucket assigned to a ratio value, best first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Classification {
    /// Best bucket.
    Excellent,
    /// Healthy.
    Good,
    /// Acceptable.
    Fair,
    /// Weak.
    Poor,
    /// Worst bucket.
    Critical,
}

impl Classification {
    /// All labels, best first.
    pub const ALL: [Self; 5] = [
        Self::Excellent,
        Self::Good,
        Self::Fair,
        Self::Poor,
        Self::Critical,
    ];
}

/// Which direction of the ratio is favourable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Direction {
    /// Larger values are better (liquidity ratios).
    #[display("higher is better")]
    HigherIsBetter,
    /// Smaller values are better (leverage ratios).
    #[display("lower is better")]
    LowerIsBetter,
}

/// A one-sided comparison against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Bound {
    /// `value > threshold`
    Above(f64),
    /// `value >= threshold`
    AtLeast(f64),
    /// `value < threshold`
    Below(f64),
    /// `value <= threshold`
    AtMost(f64),
    /// Matches any value.
    Otherwise,
}

impl Bound {
    /// Returns `true` if `value` satisfies this bound.
    #[must_use]
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Self::Above(t) => value > t,
            Self::AtLeast(t) => value >= t,
            Self::Below(t) => value < t,
            Self::AtMost(t) => value <= t,
            Self::Otherwise => true,
        }
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Above(t) => write!(f, "> {t:.2}"),
            Self::AtLeast(t) => write!(f, ">= {t:.2}"),
            Self::Below(t) => write!(f, "< {t:.2}"),
            Self::AtMost(t) => write!(f, "<= {t:.2}"),
            Self::Otherwise => f.write_str("otherwise"),
        }
    }
}

/// One `(bound, label)` pair of a threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Condition tested against the ratio value.
    pub bound: Bound,
    /// Label assigned when the condition holds.
    pub label: Classification,
}

impl Rule {
    /// Creates a new rule.
    #[must_use]
    pub const fn new(bound: Bound, label: Classification) -> Self {
        Self { bound, label }
    }
}

/// Ordered classification rules for one ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdTable {
    direction: Direction,
    rules: &'static [Rule],
}

impl ThresholdTable {
    /// Creates a table from rules listed in evaluation order.
    #[must_use]
    pub const fn new(direction: Direction, rules: &'static [Rule]) -> Self {
        Self { direction, rules }
    }

    /// Which direction of the ratio is favourable.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Rules in evaluation order.
    #[must_use]
    pub const fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Classifies a value: the label of the first admitting rule.
    ///
    /// Falls back to [`Classification::Critical`] when no rule matches,
    /// which only happens for NaN or for a table without a catch-all.
    #[must_use]
    pub fn classify(&self, value: f64) -> Classification {
        self.rules
            .iter()
            .find(|rule| rule.bound.admits(value))
            .map_or(Classification::Critical, |rule| rule.label)
    }
}
