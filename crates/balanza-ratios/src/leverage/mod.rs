//! Leverage (solvency) ratios.
//!
//! These ratios measure how heavily a company relies on debt:
//! - Debt-to-equity: total liabilities relative to shareholders' equity
//! - Debt-to-assets: total liabilities relative to total assets
//!
//! Lower values are better for both.

mod debt_to_assets;
mod debt_to_equity;

pub use debt_to_assets::DebtToAssets;
pub use debt_to_equity::DebtToEquity;
