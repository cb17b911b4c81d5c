//! JSON export.

use super::ReportRenderer;
use crate::currency::currency_symbol;
use crate::report::{InputLine, RatioLine, Report};
use balanza_traits::{Date, Result};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    company: &'a str,
    report_date: Date,
    currency: &'a str,
    currency_symbol: &'a str,
    inputs: Vec<InputLine>,
    ratios: Vec<RatioLine>,
}

/// Renders a pretty-printed JSON document.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    compact: bool,
}

impl JsonRenderer {
    /// Create a renderer that emits single-line JSON.
    #[must_use]
    pub const fn compact() -> Self {
        Self { compact: true }
    }
}

impl ReportRenderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn render(&self, report: &Report) -> Result<String> {
        let document = JsonReport {
            company: &report.company,
            report_date: report.report_date,
            currency: &report.currency,
            currency_symbol: currency_symbol(&report.currency),
            inputs: report.input_lines(),
            ratios: report.ratio_lines(),
        };
        let mut json = if self.compact {
            serde_json::to_string(&document)?
        } else {
            serde_json::to_string_pretty(&document)?
        };
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;
    use serde_json::Value;

    #[test]
    fn test_json_structure() {
        let json = JsonRenderer::default().render(&sample_report()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["company"], "Acme <Tools> & Co");
        assert_eq!(value["report_date"], "2026-10-18");
        assert_eq!(value["currency_symbol"], "€");
        assert_eq!(value["inputs"].as_array().unwrap().len(), 6);
        assert_eq!(value["inputs"][1]["field"], "current_liabilities");

        let ratios = value["ratios"].as_array().unwrap();
        assert_eq!(ratios.len(), 4);
        assert_eq!(ratios[0]["kind"], "current");
        assert_eq!(ratios[0]["value"], 1.5);
        assert_eq!(ratios[0]["classification"], "Good");
        assert!(ratios[2]["value"].is_null());
        assert_eq!(ratios[2]["interpretation"], "shareholders' equity is zero");
    }

    #[test]
    fn test_compact() {
        let json = JsonRenderer::compact().render(&sample_report()).unwrap();
        assert_eq!(json.trim_end().lines().count(), 1);
    }
}
