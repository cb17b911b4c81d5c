//! Ratio listing command implementation.

use anyhow::{Result, bail};
use balanza_ratios::registry::{available_categories, ratios_by_category, standard_ratio};
use std::io::Write;

/// List available ratios, optionally filtered by category.
pub(crate) fn list_ratios(
    category: Option<&str>,
    detailed: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let categories: Vec<_> = available_categories()
        .into_iter()
        .filter(|cat| {
            category.is_none_or(|filter| {
                cat.to_string()
                    .to_lowercase()
                    .contains(&filter.trim().to_lowercase())
            })
        })
        .collect();

    if categories.is_empty() {
        bail!(
            "Unknown category: '{}'. Expected liquidity or leverage.",
            category.unwrap_or_default()
        );
    }

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Available Ratios                         ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    for cat in categories {
        writeln!(out, "{} - {}", cat, cat.description())?;
        writeln!(out, "{}", "-".repeat(60))?;

        for info in ratios_by_category(&cat) {
            if !detailed {
                writeln!(out, "  {:18} {}", info.name, info.description)?;
                continue;
            }

            let ratio = standard_ratio(info.kind);
            let table = ratio.thresholds();
            writeln!(out, "  {} ({})", info.kind, info.name)?;
            writeln!(out, "    formula:   {}", ratio.formula())?;
            writeln!(out, "    aliases:   {}", info.aliases.join(", "))?;
            writeln!(out, "    direction: {}", table.direction())?;
            for rule in table.rules() {
                writeln!(out, "      {:<10} {}", rule.label.to_string(), rule.bound)?;
            }
            writeln!(out)?;
        }
        writeln!(out)?;
    }

    if !detailed {
        writeln!(out, "Use --detailed for formulas and classification thresholds.\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(category: Option<&str>, detailed: bool) -> Result<String> {
        let mut out = Vec::new();
        list_ratios(category, detailed, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_lists_all_ratios() {
        let text = render(None, false).unwrap();
        for name in ["current_ratio", "quick_ratio", "debt_to_equity", "debt_to_assets"] {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_category_filter() {
        let text = render(Some("Leverage"), false).unwrap();
        assert!(text.contains("debt_to_equity"));
        assert!(!text.contains("quick_ratio"));
    }

    #[test]
    fn test_unknown_category() {
        assert!(render(Some("profitability"), false).is_err());
    }

    #[test]
    fn test_detailed_shows_thresholds() {
        let text = render(Some("liquidity"), true).unwrap();
        assert!(text.contains("formula:   current assets / current liabilities"));
        assert!(text.contains("higher is better"));
        assert!(text.contains(">= 1.50"));
        assert!(text.contains("acid_test"));
    }
}
