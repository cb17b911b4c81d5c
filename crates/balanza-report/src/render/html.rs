//! Printable HTML document.

use super::ReportRenderer;
use crate::report::Report;
use balanza_traits::Result;
use std::fmt::Write as _;

const STYLE: &str = "\
body { font-family: Helvetica, Arial, sans-serif; margin: 2rem; color: #222; }
h1 { font-size: 1.5rem; margin-bottom: 0.25rem; }
.meta { color: #555; margin-bottom: 1.5rem; }
table { border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }
th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
.excellent { color: #1b5e20; } .good { color: #2e7d32; } .fair { color: #f9a825; }
.poor { color: #ef6c00; } .critical { color: #c62828; } .undefined { color: #757575; }
@media print { body { margin: 0; } @page { margin: 1.5cm; } }
";

/// Renders a self-contained HTML page suitable for a browser print dialog.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    title: String,
}

impl HtmlRenderer {
    /// Create a renderer with a custom document title.
    #[must_use]
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::with_title("Financial Ratio Report")
    }
}

/// Escapes text for use in HTML element content and attribute values.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl ReportRenderer for HtmlRenderer {
    fn name(&self) -> &str {
        "html"
    }

    fn extension(&self) -> &str {
        "html"
    }

    fn render(&self, report: &Report) -> Result<String> {
        let title = escape_html(&self.title);
        let company = escape_html(report.company_display());
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{title} - {company}</title>");
        let _ = writeln!(out, "<style>\n{STYLE}</style>");
        out.push_str("</head>\n<body>\n");

        let _ = writeln!(out, "<h1>{title}</h1>");
        let _ = writeln!(
            out,
            "<p class=\"meta\"><strong>{company}</strong><br>{}<br>Currency: {}</p>",
            escape_html(&report.date_display()),
            escape_html(&report.currency)
        );

        out.push_str("<h2>Balance Sheet</h2>\n<table>\n");
        out.push_str("<tr><th>Item</th><th>Amount</th></tr>\n");
        for line in report.input_lines() {
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td class=\"num\">{}</td></tr>",
                escape_html(&line.label),
                escape_html(&line.display_value)
            );
        }
        out.push_str("</table>\n");

        out.push_str("<h2>Ratios</h2>\n<table>\n");
        out.push_str("<tr><th>Ratio</th><th>Value</th><th>Assessment</th></tr>\n");
        for line in report.ratio_lines() {
            let class = line
                .classification
                .map_or_else(|| "undefined".to_string(), |c| c.to_string().to_lowercase());
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"{class}\">{}</td></tr>",
                escape_html(&line.name),
                escape_html(&line.display_value),
                escape_html(&line.interpretation)
            );
        }
        out.push_str("</table>\n</body>\n</html>\n");

        Ok(out)
    }
}
