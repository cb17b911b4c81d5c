//! Ratio trait and ratio result types.
//!
//! This module defines the [`Ratio`] trait, the core abstraction for a
//! balance-sheet ratio: a numerator and denominator drawn from
//! [`FinancialInputs`], plus a [`ThresholdTable`] that turns the value into a
//! qualitative [`Classification`].

use crate::classification::{Classification, ThresholdTable};
use crate::types::FinancialInputs;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifies one of the four supported ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKind {
    /// Current assets / current liabilities.
    #[display("Current Ratio")]
    Current,
    /// (Current assets - inventory) / current liabilities.
    #[display("Quick Ratio")]
    Quick,
    /// Total liabilities / shareholders' equity.
    #[display("Debt-to-Equity")]
    DebtToEquity,
    /// Total liabilities / total assets.
    #[display("Debt-to-Assets")]
    DebtToAssets,
}

impl RatioKind {
    /// All ratios, in report order.
    pub const ALL: [Self; 4] = [
        Self::Current,
        Self::Quick,
        Self::DebtToEquity,
        Self::DebtToAssets,
    ];

    /// Stable snake_case identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Current => "current_ratio",
            Self::Quick => "quick_ratio",
            Self::DebtToEquity => "debt_to_equity",
            Self::DebtToAssets => "debt_to_assets",
        }
    }

    /// The category the ratio belongs to.
    #[must_use]
    pub const fn category(&self) -> RatioCategory {
        match self {
            Self::Current | Self::Quick => RatioCategory::Liquidity,
            Self::DebtToEquity | Self::DebtToAssets => RatioCategory::Leverage,
        }
    }
}

/// Ratio category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    /// Short-term ability to meet obligations
    Liquidity,
    /// Reliance on debt financing
    Leverage,
}

impl RatioCategory {
    /// Get a human-readable description of the category.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Liquidity => "Short-term ability to cover current obligations",
            Self::Leverage => "Extent to which the company is financed by debt",
        }
    }
}

/// Why a ratio has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// Current liabilities is exactly zero.
    #[display("current liabilities is zero")]
    CurrentLiabilitiesZero,
    /// Shareholders' equity is exactly zero.
    #[display("shareholders' equity is zero")]
    ShareholdersEquityZero,
    /// Total assets is exactly zero.
    #[display("total assets is zero")]
    TotalAssetsZero,
}

/// Outcome of evaluating one ratio.
///
/// A zero denominator is a valid outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RatioResult {
    /// The ratio has a value.
    Defined {
        /// Value rounded to two decimal places.
        value: f64,
        /// Bucket assigned from the unrounded value.
        classification: Classification,
    },
    /// The denominator was zero.
    Undefined {
        /// Which denominator was zero.
        reason: UndefinedReason,
    },
}

impl RatioResult {
    /// The rounded value, if defined.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Defined { value, .. } => Some(*value),
            Self::Undefined { .. } => None,
        }
    }

    /// The classification, if defined.
    #[must_use]
    pub const fn classification(&self) -> Option<Classification> {
        match self {
            Self::Defined { classification, .. } => Some(*classification),
            Self::Undefined { .. } => None,
        }
    }

    /// Returns `true` if the denominator was zero.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined { .. })
    }

    /// Text shown next to the value: the classification label, or the
    /// zero-denominator message.
    #[must_use]
    pub fn interpretation(&self) -> String {
        match self {
            Self::Defined { classification, .. } => classification.to_string(),
            Self::Undefined { reason } => reason.to_string(),
        }
    }
}

/// Rounds to two decimal places, half away from zero.
///
/// Operates on the binary value, so inputs such as `1.005` (stored slightly
/// below the midpoint) round down. Values too large to scale by 100 carry no
/// fractional digits and are returned unchanged, as are infinities.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// A balance-sheet ratio.
///
/// Implementations supply the formula and the threshold table; the provided
/// [`Ratio::evaluate`] handles the zero-denominator guard, rounding and
/// classification. Implementations should be thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```
/// use balanza_traits::{
///     Bound, Classification, Direction, FinancialInputs, Ratio, RatioKind, Rule,
///     ThresholdTable, UndefinedReason,
/// };
///
/// struct CashCover;
///
/// const TABLE: ThresholdTable = ThresholdTable::new(
///     Direction::HigherIsBetter,
///     &[
///         Rule::new(Bound::AtLeast(1.0), Classification::Good),
///         Rule::new(Bound::Otherwise, Classification::Poor),
///     ],
/// );
///
/// impl Ratio for CashCover {
///     fn kind(&self) -> RatioKind { RatioKind::Current }
///     fn numerator(&self, i: &FinancialInputs) -> f64 { i.current_assets }
///     fn denominator(&self, i: &FinancialInputs) -> f64 { i.current_liabilities }
///     fn zero_denominator(&self) -> UndefinedReason { UndefinedReason::CurrentLiabilitiesZero }
///     fn thresholds(&self) -> &ThresholdTable { &TABLE }
/// }
///
/// let inputs = FinancialInputs::new(150.0, 100.0, 0.0, 1.0, 1.0, 1.0);
/// assert_eq!(CashCover.evaluate(&inputs).value(), Some(1.5));
/// ```
pub trait Ratio: Send + Sync {
    /// Which ratio this is.
    fn kind(&self) -> RatioKind;

    /// Returns the name of this ratio.
    fn name(&self) -> &str {
        self.kind().id()
    }

    /// Human-readable formula.
    fn formula(&self) -> &str {
        ""
    }

    /// Numerator of the formula.
    fn numerator(&self, inputs: &FinancialInputs) -> f64;

    /// Denominator of the formula.
    fn denominator(&self, inputs: &FinancialInputs) -> f64;

    /// Reason reported when the denominator is zero.
    fn zero_denominator(&self) -> UndefinedReason;

    /// Classification rules.
    fn thresholds(&self) -> &ThresholdTable;

    /// Unrounded value, or `None` when the denominator is exactly zero.
    fn raw_value(&self, inputs: &FinancialInputs) -> Option<f64> {
        let denominator = self.denominator(inputs);
        if denominator == 0.0 {
            return None;
        }
        Some(self.numerator(inputs) / denominator)
    }

    /// Computes, rounds and classifies the ratio.
    ///
    /// Classification uses the unrounded value.
    fn evaluate(&self, inputs: &FinancialInputs) -> RatioResult {
        match self.raw_value(inputs) {
            Some(raw) => RatioResult::Defined {
                value: round_to_hundredths(raw),
                classification: self.thresholds().classify(raw),
            },
            None => RatioResult::Undefined {
                reason: self.zero_denominator(),
            },
        }
    }
}

/// The four ratio results of one computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioReport {
    /// Current ratio.
    pub current: RatioResult,
    /// Quick ratio.
    pub quick: RatioResult,
    /// Debt-to-equity ratio.
    pub debt_to_equity: RatioResult,
    /// Debt-to-assets ratio.
    pub debt_to_assets: RatioResult,
}

impl RatioReport {
    /// Returns the result for one ratio.
    #[must_use]
    pub const fn get(&self, kind: RatioKind) -> &RatioResult {
        match kind {
            RatioKind::Current => &self.current,
            RatioKind::Quick => &self.quick,
            RatioKind::DebtToEquity => &self.debt_to_equity,
            RatioKind::DebtToAssets => &self.debt_to_assets,
        }
    }

    /// Iterates over `(kind, result)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (RatioKind, &RatioResult)> + '_ {
        RatioKind::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}
