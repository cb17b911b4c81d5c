//! Liquidity ratios.
//!
//! These ratios measure a company's ability to meet short-term obligations
//! from short-term assets:
//! - Current ratio: current assets relative to current liabilities
//! - Quick ratio: current assets less inventory, relative to current liabilities
//!
//! Higher values are better for both.

mod current;
mod quick;

pub use current::CurrentRatio;
pub use quick::QuickRatio;
