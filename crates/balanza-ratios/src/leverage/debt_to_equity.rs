//! Debt-to-equity ratio.

use crate::thresholds::DEBT_TO_EQUITY;
use balanza_traits::{FinancialInputs, Ratio, RatioKind, ThresholdTable, UndefinedReason};

/// Debt-to-equity: total liabilities / shareholders' equity.
///
/// Lower is better. Negative equity yields a negative ratio, which the
/// standard table places in the best bucket; callers that care should check
/// the sign of [`FinancialInputs::shareholders_equity`] themselves.
#[derive(Debug, Clone)]
pub struct DebtToEquity {
    thresholds: ThresholdTable,
}

impl DebtToEquity {
    /// Create a debt-to-equity ratio classified with a custom table.
    #[must_use]
    pub const fn with_thresholds(thresholds: ThresholdTable) -> Self {
        Self { thresholds }
    }
}

impl Default for DebtToEquity {
    fn default() -> Self {
        Self::with_thresholds(DEBT_TO_EQUITY)
    }
}

impl Ratio for DebtToEquity {
    fn kind(&self) -> RatioKind {
        RatioKind::DebtToEquity
    }

    fn formula(&self) -> &str {
        "total liabilities / shareholders' equity"
    }

    fn numerator(&self, inputs: &FinancialInputs) -> f64 {
        inputs.total_liabilities
    }

    fn denominator(&self, inputs: &FinancialInputs) -> f64 {
        inputs.shareholders_equity
    }

    fn zero_denominator(&self) -> UndefinedReason {
        UndefinedReason::ShareholdersEquityZero
    }

    fn thresholds(&self) -> &ThresholdTable {
        &self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balanza_traits::Classification;

    fn inputs(total_liabilities: f64, shareholders_equity: f64) -> FinancialInputs {
        FinancialInputs {
            total_liabilities,
            shareholders_equity,
            ..Default::default()
        }
    }

    #[test]
    fn test_poor() {
        let result = DebtToEquity::default().evaluate(&inputs(250.0, 100.0));
        assert_eq!(result.value(), Some(2.5));
        assert_eq!(result.classification(), Some(Classification::Poor));
    }

    #[test]
    fn test_edges() {
        let ratio = DebtToEquity::default();
        let label = |tl| ratio.evaluate(&inputs(tl, 100.0)).classification();
        assert_eq!(label(40.0), Some(Classification::Excellent));
        assert_eq!(label(50.0), Some(Classification::Good));
        assert_eq!(label(100.0), Some(Classification::Good));
        assert_eq!(label(200.0), Some(Classification::Fair));
        assert_eq!(label(500.0), Some(Classification::Poor));
        assert_eq!(label(600.0), Some(Classification::Critical));
    }

    #[test]
    fn test_zero_equity() {
        let result = DebtToEquity::default().evaluate(&inputs(250.0, 0.0));
        assert_eq!(result.interpretation(), "shareholders' equity is zero");
    }
}
