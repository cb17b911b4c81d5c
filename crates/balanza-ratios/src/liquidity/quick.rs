//! Quick (acid-test) ratio.

use crate::thresholds::QUICK_RATIO;
use balanza_traits::{FinancialInputs, Ratio, RatioKind, ThresholdTable, UndefinedReason};

/// Quick ratio: (current assets - inventory) / current liabilities.
///
/// Liquidity excluding inventory, the least liquid current asset. Higher is
/// better.
#[derive(Debug, Clone)]
pub struct QuickRatio {
    thresholds: ThresholdTable,
}

impl QuickRatio {
    /// Create a quick ratio classified with a custom table.
    #[must_use]
    pub const fn with_thresholds(thresholds: ThresholdTable) -> Self {
        Self { thresholds }
    }
}

impl Default for QuickRatio {
    fn default() -> Self {
        Self::with_thresholds(QUICK_RATIO)
    }
}

impl Ratio for QuickRatio {
    fn kind(&self) -> RatioKind {
        RatioKind::Quick
    }

    fn formula(&self) -> &str {
        "(current assets - inventory) / current liabilities"
    }

    fn numerator(&self, inputs: &FinancialInputs) -> f64 {
        inputs.current_assets - inputs.inventory
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use balanza_traits::Classification;

    fn inputs(current_assets: f64, inventory: f64, current_liabilities: f64) -> FinancialInputs {
        FinancialInputs {
            current_assets,
            inventory,
            current_liabilities,
            ..Default::default()
        }
    }

    #[test]
    fn test_lower_edge_of_fair() {
        // (100 - 30) / 100 = 0.7, the inclusive lower edge of [0.7, 1.0)
        let result = QuickRatio::default().evaluate(&inputs(100.0, 30.0, 100.0));
        assert_relative_eq!(result.value().unwrap(), 0.7);
        assert_eq!(result.classification(), Some(Classification::Fair));
    }

    #[test]
    fn test_upper_edge_of_good() {
        let result = QuickRatio::default().evaluate(&inputs(200.0, 50.0, 100.0));
        assert_eq!(result.classification(), Some(Classification::Good));
    }

    #[test]
    fn test_inventory_exceeding_assets() {
        let result = QuickRatio::default().evaluate(&inputs(50.0, 80.0, 100.0));
        assert_relative_eq!(result.value().unwrap(), -0.3);
        assert_eq!(result.classification(), Some(Classification::Critical));
    }

    #[test]
    fn test_zero_liabilities() {
        let result = QuickRatio::default().evaluate(&inputs(100.0, 30.0, 0.0));
        assert_eq!(result.interpretation(), "current liabilities is zero");
    }
}
