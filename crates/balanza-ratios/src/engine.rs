//! The ratio engine: validated inputs in, four classified ratios out.

use crate::leverage::{DebtToAssets, DebtToEquity};
use crate::liquidity::{CurrentRatio, QuickRatio};
use balanza_traits::{FinancialInputs, Ratio, RatioReport, ValidationError};
use tracing::{debug, trace};

/// Computes and classifies the current, quick, debt-to-equity and
/// debt-to-assets ratios.
///
/// The engine is stateless: every call to [`RatioEngine::compute`] is
/// independent and returns bit-identical results for identical inputs.
///
/// # Example
///
/// ```
/// use balanza_ratios::RatioEngine;
/// use balanza_traits::{Classification, FinancialInputs};
///
/// let inputs = FinancialInputs::new(150.0, 100.0, 30.0, 500.0, 400.0, 100.0);
/// let report = RatioEngine::default().compute(inputs).unwrap();
/// assert_eq!(report.current.classification(), Some(Classification::Good));
/// assert_eq!(report.debt_to_assets.value(), Some(0.8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RatioEngine {
    current: CurrentRatio,
    quick: QuickRatio,
    debt_to_equity: DebtToEquity,
    debt_to_assets: DebtToAssets,
}

impl RatioEngine {
    /// Create an engine from explicitly configured ratios.
    #[must_use]
    pub const fn new(
        current: CurrentRatio,
        quick: QuickRatio,
        debt_to_equity: DebtToEquity,
        debt_to_assets: DebtToAssets,
    ) -> Self {
        Self {
            current,
            quick,
            debt_to_equity,
            debt_to_assets,
        }
    }

    /// The ratios this engine evaluates, in report order.
    #[must_use]
    pub fn ratios(&self) -> [&dyn Ratio; 4] {
        [
            &self.current,
            &self.quick,
            &self.debt_to_equity,
            &self.debt_to_assets,
        ]
    }

    /// Computes all four ratios.
    ///
    /// Each ratio is evaluated independently, so a zero denominator in one
    /// leaves the others untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any input is NaN or infinite. No
    /// partial results are produced in that case.
    pub fn compute(&self, inputs: FinancialInputs) -> Result<RatioReport, ValidationError> {
        inputs.validate().inspect_err(|_| {
            debug!(?inputs, "rejecting non-finite inputs");
        })?;

        let report = RatioReport {
            current: self.current.evaluate(&inputs),
            quick: self.quick.evaluate(&inputs),
            debt_to_equity: self.debt_to_equity.evaluate(&inputs),
            debt_to_assets: self.debt_to_assets.evaluate(&inputs),
        };

        for (kind, result) in report.iter() {
            trace!(ratio = kind.id(), ?result, "ratio evaluated");
        }

        Ok(report)
    }
}

/// Computes all four ratios with the standard threshold tables.
///
/// Shorthand for `RatioEngine::default().compute(inputs)`.
///
/// # Errors
///
/// Returns [`ValidationError`] if any input is NaN or infinite.
pub fn compute(inputs: FinancialInputs) -> Result<RatioReport, ValidationError> {
    RatioEngine::default().compute(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use balanza_traits::{Classification, RatioKind, RatioResult, UndefinedReason};

    fn sample() -> FinancialInputs {
        FinancialInputs::new(150.0, 100.0, 30.0, 500.0, 400.0, 100.0)
    }

    #[test]
    fn test_finite_inputs_yield_four_results() {
        let report = compute(sample()).unwrap();
        assert_eq!(report.iter().count(), 4);
        assert!(report.iter().all(|(_, r)| !r.is_undefined()));
    }

    #[test]
    fn test_reference_values() {
        let report = compute(sample()).unwrap();

        assert_eq!(report.current.value(), Some(1.5));
        assert_eq!(report.current.classification(), Some(Classification::Good));

        assert_relative_eq!(report.quick.value().unwrap(), 1.2);
        assert_eq!(report.quick.classification(), Some(Classification::Good));

        assert_eq!(report.debt_to_equity.value(), Some(4.0));
        assert_eq!(report.debt_to_equity.classification(), Some(Classification::Poor));

        assert_eq!(report.debt_to_assets.value(), Some(0.8));
        assert_eq!(report.debt_to_assets.classification(), Some(Classification::Poor));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        for poison in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut inputs = sample();
            inputs.total_assets = poison;
            let err = compute(inputs).unwrap_err();
            assert_eq!(err.to_string(), "all fields must contain valid numeric values");
        }
    }

    #[test]
    fn test_zero_current_liabilities_leaves_others() {
        let mut inputs = sample();
        inputs.current_liabilities = 0.0;
        let report = compute(inputs).unwrap();

        let expected = RatioResult::Undefined {
            reason: UndefinedReason::CurrentLiabilitiesZero,
        };
        assert_eq!(report.current, expected);
        assert_eq!(report.quick, expected);
        assert_eq!(report.debt_to_equity.value(), Some(4.0));
        assert_eq!(report.debt_to_assets.value(), Some(0.8));
    }

    #[test]
    fn test_all_denominators_zero() {
        let report = compute(FinancialInputs::default()).unwrap();
        assert!(report.iter().all(|(_, r)| r.is_undefined()));
        assert_eq!(
            report.get(RatioKind::DebtToEquity).interpretation(),
            "shareholders' equity is zero"
        );
        assert_eq!(
            report.get(RatioKind::DebtToAssets).interpretation(),
            "total assets is zero"
        );
    }

    #[test]
    fn test_one_third_rounds_to_hundredths() {
        let inputs = FinancialInputs::new(1.0, 3.0, 0.0, 3.0, 1.0, 3.0);
        let report = compute(inputs).unwrap();
        assert_eq!(report.current.value(), Some(0.33));
        assert_eq!(report.debt_to_assets.value(), Some(0.33));
    }

    #[test]
    fn test_very_large_ratio_keeps_its_value() {
        let report = compute(FinancialInputs::new(1e307, 1.0, 0.0, 1.0, 1.0, 1.0)).unwrap();
        let value = report.current.value().unwrap();
        assert!(value.is_finite());
        assert_eq!(value, 1e307);
        assert_eq!(report.current.classification(), Some(Classification::Excellent));
    }

    #[test]
    fn test_overflowing_quotient_is_infinite_and_classified() {
        let report = compute(FinancialInputs::new(1e308, 1e-10, 0.0, 1.0, 1e308, 1e-10)).unwrap();
        assert_eq!(report.current.value(), Some(f64::INFINITY));
        assert_eq!(report.current.classification(), Some(Classification::Excellent));
        assert_eq!(report.debt_to_equity.value(), Some(f64::INFINITY));
        assert_eq!(report.debt_to_equity.classification(), Some(Classification::Critical));
    }

    #[test]
    fn test_idempotent() {
        let inputs = FinancialInputs::new(123.456, 78.9, 12.3, 987.6, 543.2, 444.4);
        let engine = RatioEngine::default();
        let first = engine.compute(inputs).unwrap();
        let second = engine.compute(inputs).unwrap();
        for ((_, a), (_, b)) in first.iter().zip(second.iter()) {
            assert_eq!(a.value().map(f64::to_bits), b.value().map(f64::to_bits));
            assert_eq!(a.classification(), b.classification());
        }
    }

    #[test]
    fn test_ratios_in_report_order() {
        let engine = RatioEngine::default();
        let kinds: Vec<_> = engine.ratios().iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, RatioKind::ALL);
    }
}
