//! Ratio registry for discovering and categorizing available ratios.
//!
//! This module provides metadata and lookup by name (including common
//! aliases) for every ratio in the balanza-ratios library.

use crate::leverage::{DebtToAssets, DebtToEquity};
use crate::liquidity::{CurrentRatio, QuickRatio};
use balanza_traits::{BalanzaError, Ratio, RatioCategory, RatioKind, Result};
use serde::Serialize;

/// Metadata about a ratio.
#[derive(Debug, Clone, Serialize)]
pub struct RatioInfo {
    /// Unique identifier for the ratio
    pub name: &'static str,

    /// Which ratio this describes
    pub kind: RatioKind,

    /// Category classification
    pub category: RatioCategory,

    /// Human-readable description
    pub description: &'static str,

    /// Alternative names accepted by [`get_ratio_info`]
    pub aliases: &'static [&'static str],
}

/// Get information about all available ratios.
#[must_use]
pub fn available_ratios() -> Vec<RatioInfo> {
    vec![
        // Liquidity ratios
        RatioInfo {
            name: RatioKind::Current.id(),
            kind: RatioKind::Current,
            category: RatioCategory::Liquidity,
            description: "Current assets relative to current liabilities",
            aliases: &["current", "cr", "working_capital_ratio"],
        },
        RatioInfo {
            name: RatioKind::Quick.id(),
            kind: RatioKind::Quick,
            category: RatioCategory::Liquidity,
            description: "Current assets excluding inventory relative to current liabilities",
            aliases: &["quick", "qr", "acid_test"],
        },
        // Leverage ratios
        RatioInfo {
            name: RatioKind::DebtToEquity.id(),
            kind: RatioKind::DebtToEquity,
            category: RatioCategory::Leverage,
            description: "Total liabilities relative to shareholders' equity",
            aliases: &["de", "d/e", "debt_equity"],
        },
        RatioInfo {
            name: RatioKind::DebtToAssets.id(),
            kind: RatioKind::DebtToAssets,
            category: RatioCategory::Leverage,
            description: "Share of total assets financed by liabilities",
            aliases: &["da", "d/a", "debt_ratio"],
        },
    ]
}

/// Get all ratios in a specific category.
#[must_use]
pub fn ratios_by_category(category: &RatioCategory) -> Vec<RatioInfo> {
    available_ratios()
        .into_iter()
        .filter(|info| &info.category == category)
        .collect()
}

/// Get information about a specific ratio by name or alias.
///
/// Matching is case-insensitive and treats `-` like `_`.
#[must_use]
pub fn get_ratio_info(name: &str) -> Option<RatioInfo> {
    let needle = name.trim().to_lowercase().replace('-', "_");
    available_ratios()
        .into_iter()
        .find(|info| info.name == needle || info.aliases.contains(&needle.as_str()))
}

/// Get all ratio categories with ratios.
#[must_use]
pub fn available_categories() -> Vec<RatioCategory> {
    let mut categories: Vec<_> = available_ratios()
        .into_iter()
        .map(|info| info.category)
        .collect();
    categories.dedup();
    categories
}

/// Create a ratio with its standard thresholds.
#[must_use]
pub fn standard_ratio(kind: RatioKind) -> Box<dyn Ratio> {
    match kind {
        RatioKind::Current => Box::new(CurrentRatio::default()),
        RatioKind::Quick => Box::new(QuickRatio::default()),
        RatioKind::DebtToEquity => Box::new(DebtToEquity::default()),
        RatioKind::DebtToAssets => Box::new(DebtToAssets::default()),
    }
}

/// Create a ratio instance by name or alias.
///
/// # Errors
///
/// Returns [`BalanzaError::RatioNotFound`] if the name matches no ratio.
pub fn create_ratio(name: &str) -> Result<Box<dyn Ratio>> {
    get_ratio_info(name)
        .map(|info| standard_ratio(info.kind))
        .ok_or_else(|| BalanzaError::RatioNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_ratios() {
        let ratios = available_ratios();
        assert_eq!(ratios.len(), 4);
        let kinds: Vec<_> = ratios.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, RatioKind::ALL);
    }

    #[test]
    fn test_info_matches_kind() {
        for info in available_ratios() {
            assert_eq!(info.name, info.kind.id());
            assert_eq!(info.category, info.kind.category());
        }
    }

    #[test]
    fn test_ratios_by_category() {
        assert_eq!(ratios_by_category(&RatioCategory::Liquidity).len(), 2);
        assert_eq!(ratios_by_category(&RatioCategory::Leverage).len(), 2);
    }

    #[test]
    fn test_get_ratio_info() {
        let info = get_ratio_info("quick_ratio").unwrap();
        assert_eq!(info.kind, RatioKind::Quick);

        assert_eq!(get_ratio_info("Acid-Test").unwrap().kind, RatioKind::Quick);
        assert_eq!(get_ratio_info("D/E").unwrap().kind, RatioKind::DebtToEquity);
        assert!(get_ratio_info("return_on_equity").is_none());
    }

    #[test]
    fn test_available_categories() {
        assert_eq!(
            available_categories(),
            vec![RatioCategory::Liquidity, RatioCategory::Leverage]
        );
    }

    #[test]
    fn test_create_ratio() {
        let ratio = create_ratio("da").unwrap();
        assert_eq!(ratio.kind(), RatioKind::DebtToAssets);

        let missing = create_ratio("nonexistent");
        assert!(matches!(missing, Err(BalanzaError::RatioNotFound(_))));
    }
}
