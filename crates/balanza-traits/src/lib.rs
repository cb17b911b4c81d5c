#![doc(issue_tracker_base_url = "https://github.com/factordynamics/balanza/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core trait definitions for the Balanza financial-ratio framework.
//!
//! This crate provides the foundational abstractions shared by the ratio
//! engine and the presentation layer: balance-sheet inputs, the [`Ratio`]
//! trait, threshold tables, ratio results and the error types.

/// The version of the balanza-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod classification;
pub mod error;
pub mod ratio;
pub mod types;

// Re-exports
pub use classification::{Bound, Classification, Direction, Rule, ThresholdTable};
pub use error::{BalanzaError, Result, VALIDATION_MESSAGE, ValidationError};
pub use ratio::{
    Ratio, RatioCategory, RatioKind, RatioReport, RatioResult, UndefinedReason,
    round_to_hundredths,
};
pub use types::{Date, Field, FinancialInputs, RawInputs};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
