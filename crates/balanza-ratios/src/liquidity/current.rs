//! Current ratio.

use crate::thresholds::CURRENT_RATIO;
use balanza_traits::{FinancialInputs, Ratio, RatioKind, ThresholdTable, UndefinedReason};

/// Current ratio: current assets / current liabilities.
///
/// Measures whether short-term assets cover short-term obligations. Higher
/// is better; classified with [`CURRENT_RATIO`] unless another table is
/// supplied.
///
/// # Example
///
/// ```
/// use balanza_ratios::liquidity::CurrentRatio;
/// use balanza_traits::{Classification, FinancialInputs, Ratio};
///
/// let inputs = FinancialInputs::new(150.0, 100.0, 0.0, 500.0, 200.0, 300.0);
/// let result = CurrentRatio::default().evaluate(&inputs);
/// assert_eq!(result.value(), Some(1.5));
/// assert_eq!(result.classification(), Some(Classification::Good));
/// ```
#[derive(Debug, Clone)]
pub struct CurrentRatio {
    thresholds: ThresholdTable,
}

impl CurrentRatio {
    /// Create a current ratio classified with a custom table.
    #[must_use]
    pub const fn with_thresholds(thresholds: ThresholdTable) -> Self {
        Self { thresholds }
    }
}

impl Default for CurrentRatio {
    fn default() -> Self {
        Self::with_thresholds(CURRENT_RATIO)
    }
}

impl Ratio for CurrentRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::Current
    }

    fn formula(&self) -> &str {
        "current assets / current liabilities"
    }

    fn numerator(&self, inputs: &FinancialInputs) -> f64 {
        inputs.current_assets
    }

    fn denominator(&self, inputs: &FinancialInputs) -> f64 {
        inputs.current_liabilities
    }

    fn zero_denominator(&self) -> UndefinedReason {
        UndefinedReason::CurrentLiabilitiesZero
    }

    fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }
}
