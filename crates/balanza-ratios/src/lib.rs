//! Ratio implementations and the ratio engine for balanza.
//!
//! This crate provides the four balance-sheet ratios, grouped by category:
//! - Liquidity: current ratio, quick ratio
//! - Leverage: debt-to-equity, debt-to-assets
//!
//! Each ratio is rounded to two decimal places and classified into one of
//! five qualitative buckets using the tables in [`thresholds`].
//!
//! # Example
//!
//! ```
//! use balanza_ratios::compute;
//! use balanza_traits::{Classification, FinancialInputs};
//!
//! let inputs = FinancialInputs::new(150.0, 100.0, 30.0, 500.0, 250.0, 100.0);
//! let report = compute(inputs).unwrap();
//!
//! assert_eq!(report.current.value(), Some(1.5));
//! assert_eq!(report.debt_to_equity.classification(), Some(Classification::Poor));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod engine;
pub mod leverage;
pub mod liquidity;
pub mod registry;
pub mod thresholds;

// Re-export key types
pub use engine::{RatioEngine, compute};
pub use registry::{RatioInfo, create_ratio, get_ratio_info};
