#![doc(issue_tracker_base_url = "https://github.com/factordynamics/balanza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # balanza
//!
//! Liquidity and solvency ratios from a balance sheet.
//!
//! balanza is an umbrella crate that re-exports all balanza sub-crates for
//! convenience. It provides a unified API for computing and classifying the
//! four standard balance-sheet ratios and for rendering them as a printable
//! report.
//!
//! ## Quick Start
//!
//! ```
//! use balanza::prelude::*;
//!
//! # fn main() -> balanza::Result<()> {
//! let inputs = FinancialInputs::new(150.0, 100.0, 30.0, 500.0, 250.0, 100.0);
//! let ratios = compute(inputs)?;
//!
//! assert_eq!(ratios.current.value(), Some(1.5));
//! assert_eq!(ratios.current.classification(), Some(Classification::Good));
//! assert_eq!(ratios.debt_to_equity.classification(), Some(Classification::Poor));
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types and the [`Ratio`] trait
//! - [`ratios`] - The four ratios, their threshold tables and the engine
//! - [`report`] - Form state, formatting and report renderers
//!
//! ## Architecture
//!
//! 1. **Inputs** are parsed and validated into [`FinancialInputs`]
//! 2. **Ratios** divide, round to two decimals and classify the unrounded value
//! 3. **Reports** pair the ratios with display metadata
//! 4. **Renderers** turn a report into text, HTML or JSON

/// Version information for the balanza crate.
///
/// This constant contains the current version of balanza as specified in Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Core type and trait definitions for balanza.
///
/// - [`Ratio`] - A balance-sheet ratio with a threshold table
/// - [`FinancialInputs`] - Validated balance-sheet figures
/// - [`RatioReport`] - The four ratio results of one computation
pub mod traits {
    pub use balanza_traits::*;
}

// Re-export core trait at top level for convenience
pub use balanza_traits::Ratio;

// Re-export error types
pub use balanza_traits::{BalanzaError, Result, ValidationError};

// Re-export common types
pub use balanza_traits::{
    Classification, Date, Field, FinancialInputs, RatioKind, RatioReport, RatioResult, RawInputs,
};

// ============================================================================
// Ratio Implementations
// ============================================================================

/// Ratio implementations and the ratio engine.
///
/// ## Liquidity
///
/// - **Current ratio**: current assets / current liabilities
/// - **Quick ratio**: (current assets - inventory) / current liabilities
///
/// ## Leverage
///
/// - **Debt-to-equity**: total liabilities / shareholders' equity
/// - **Debt-to-assets**: total liabilities / total assets
///
/// # Example
///
/// ```
/// use balanza::ratios::liquidity::QuickRatio;
/// use balanza::{FinancialInputs, Ratio};
///
/// let inputs = FinancialInputs::new(100.0, 100.0, 30.0, 0.0, 0.0, 0.0);
/// let quick = QuickRatio::default().evaluate(&inputs);
/// assert_eq!(quick.interpretation(), "Fair");
/// ```
pub mod ratios {
    pub use balanza_ratios::*;
}

pub use balanza_ratios::{RatioEngine, compute};

// ============================================================================
// Presentation
// ============================================================================

/// Form state, formatting and printable reports.
///
/// # Example
///
/// ```
/// use balanza::report::{HtmlRenderer, Report};
/// use balanza::{Date, FinancialInputs, ReportRenderer};
///
/// let inputs = FinancialInputs::new(150.0, 100.0, 30.0, 500.0, 250.0, 100.0);
/// let date = Date::from_ymd_opt(2026, 10, 18).unwrap();
/// let report = Report::compute("Acme", date, "EUR", inputs).unwrap();
///
/// let html = HtmlRenderer::default().render(&report).unwrap();
/// assert!(html.contains("€150.00"));
/// ```
pub mod report {
    pub use balanza_report::*;
}

pub use balanza_report::{FormState, OutputFormat, Report, ReportRenderer, renderer_for};

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```
/// use balanza::prelude::*;
/// ```
///
/// This brings into scope the core types, the engine, the form and the
/// renderers, plus [`Result`] and [`BalanzaError`].
pub mod prelude {
    pub use crate::traits::*;
    pub use crate::{FormState, OutputFormat, RatioEngine, Report, ReportRenderer};
    pub use crate::{compute, renderer_for};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_ratio(_ratio: &dyn Ratio) {}
        fn _accept_renderer(_renderer: &dyn ReportRenderer) {}
    }

    #[test]
    fn test_end_to_end() {
        let inputs = FinancialInputs::new(150.0, 100.0, 30.0, 500.0, 400.0, 100.0);
        let date = Date::from_ymd_opt(2026, 1, 31).unwrap();
        let report = Report::compute("Acme", date, "USD", inputs).unwrap();
        let text = renderer_for(OutputFormat::Text).render(&report).unwrap();
        assert!(text.contains("$150.00"));
        assert!(text.contains("January 31, 2026"));
    }

    #[test]
    fn test_error_types() {
        let _result: Result<()> = Ok(());
        let error: BalanzaError = ValidationError.into();
        assert!(error.is_validation());
    }
}
