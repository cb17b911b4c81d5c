//! Debt-to-assets ratio.

use crate::thresholds::DEBT_TO_ASSETS;
use balanza_traits::{FinancialInputs, Ratio, RatioKind, ThresholdTable, UndefinedReason};

/// Debt-to-assets: total liabilities / total assets.
///
/// Proportion of assets financed by debt. Lower is better.
#[derive(Debug, Clone)]
pub struct DebtToAssets {
    thresholds: ThresholdTable,
}

impl DebtToAssets {
    /// Create a debt-to-assets ratio classified with a custom table.
    #[must_use]
    pub const fn with_thresholds(thresholds: ThresholdTable) -> Self {
        Self { thresholds }
    }
}

impl Default for DebtToAssets {
    fn default() -> Self {
        Self::with_thresholds(DEBT_TO_ASSETS)
    }
}

impl Ratio for DebtToAssets {
    fn kind(&self) -> RatioKind {
        RatioKind::DebtToAssets
    }

    fn formula(&self) -> &str {
        "total liabilities / total assets"
    }

    fn numerator(&self, inputs: &FinancialInputs) -> f64 {
        inputs.total_liabilities
    }

    fn denominator(&self, inputs: &FinancialInputs) -> f64 {
        inputs.total_assets
    }

    fn zero_denominator(&self) -> UndefinedReason {
        UndefinedReason::TotalAssetsZero
    }

    fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }
}
