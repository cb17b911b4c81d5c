//! Plain-text report layout.

use super::ReportRenderer;
use crate::report::Report;
use balanza_traits::Result;
use std::fmt::Write as _;

/// Renders a boxed terminal report.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: usize,
}

impl TextRenderer {
    /// Create a renderer with a custom rule width.
    #[must_use]
    pub const fn with_width(width: usize) -> Self {
        Self { width }
    }

    fn banner(&self, out: &mut String, title: &str) {
        let inner = self.width.saturating_sub(2);
        let pad = inner.saturating_sub(title.chars().count());
        let left = pad / 2;
        let _ = writeln!(out, "╔{}╗", "═".repeat(inner));
        let _ = writeln!(
            out,
            "║{}{}{}║",
            " ".repeat(left),
            title,
            " ".repeat(pad - left)
        );
        let _ = writeln!(out, "╚{}╝", "═".repeat(inner));
    }

    fn section(&self, out: &mut String, title: &str) {
        let rule = "━".repeat(self.width);
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "{rule}");
        out.push('\n');
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::with_width(64)
    }
}

impl ReportRenderer for TextRenderer {
    fn name(&self) -> &str {
        "text"
    }

    fn extension(&self) -> &str {
        "txt"
    }

    fn render(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        out.push('\n');
        self.banner(&mut out, "Financial Ratio Report");
        out.push('\n');

        let _ = writeln!(out, "Company:  {}", report.company_display());
        let _ = writeln!(out, "Date:     {}", report.date_display());
        let _ = writeln!(out, "Currency: {}", report.currency);
        out.push('\n');

        self.section(&mut out, "BALANCE SHEET");
        for line in report.input_lines() {
            let _ = writeln!(out, "{:<24} {:>24}", line.label, line.display_value);
        }
        out.push('\n');

        self.section(&mut out, "RATIOS");
        let _ = writeln!(out, "{:<18} {:>8}   {}", "Ratio", "Value", "Assessment");
        let _ = writeln!(out, "{}", "─".repeat(self.width.min(56)));
        for line in report.ratio_lines() {
            let _ = writeln!(
                out,
                "{:<18} {:>8}   {}",
                line.name, line.display_value, line.interpretation
            );
        }
        out.push('\n');

        Ok(out)
    }
}
