//! Rendering a [`Report`] into a standalone document.
//!
//! [`ReportRenderer`] is the "print/export" capability: the presentation
//! layer picks a renderer for its target (terminal, browser print dialog,
//! machine consumer) and writes the result wherever it needs to go.

mod html;
mod json;
mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::report::Report;
use balanza_traits::{BalanzaError, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// Turns a report into a printable document.
///
/// Implementations must be pure: the same report always renders to the same
/// document.
pub trait ReportRenderer: Send + Sync {
    /// Short identifier, e.g. `html`.
    fn name(&self) -> &str;

    /// File extension for documents produced by this renderer.
    fn extension(&self) -> &str;

    /// Renders the report to a string.
    ///
    /// # Errors
    ///
    /// Returns [`BalanzaError`] if the report cannot be serialised.
    fn render(&self, report: &Report) -> Result<String>;

    /// Renders the report into a writer.
    ///
    /// # Errors
    ///
    /// Returns [`BalanzaError`] if rendering or writing fails.
    fn render_to(&self, report: &Report, writer: &mut dyn Write) -> Result<()> {
        let document = self.render(report)?;
        writer.write_all(document.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Output formats understood by [`renderer_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Boxed plain-text layout for terminals.
    #[default]
    #[display("text")]
    Text,
    /// Standalone HTML document with print styles.
    #[display("html")]
    Html,
    /// Pretty-printed JSON.
    #[display("json")]
    Json,
}

impl OutputFormat {
    /// All formats.
    pub const ALL: [Self; 3] = [Self::Text, Self::Html, Self::Json];
}

impl FromStr for OutputFormat {
    type Err = BalanzaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(BalanzaError::Render(format!(
                "unknown output format '{other}' (expected text, html or json)"
            ))),
        }
    }
}

/// Returns the renderer for a format.
#[must_use]
pub fn renderer_for(format: OutputFormat) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::default()),
        OutputFormat::Html => Box::new(HtmlRenderer::default()),
        OutputFormat::Json => Box::new(JsonRenderer::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "pdf".parse::<OutputFormat>(),
            Err(BalanzaError::Render(_))
        ));
    }

    #[test]
    fn test_renderer_for() {
        for format in OutputFormat::ALL {
            let renderer = renderer_for(format);
            assert_eq!(renderer.name(), format.to_string());
        }
        assert_eq!(renderer_for(OutputFormat::Text).extension(), "txt");
    }

    #[test]
    fn test_render_to_writer() {
        let report = sample_report();
        let renderer = renderer_for(OutputFormat::Json);
        let mut buffer = Vec::new();
        renderer.render_to(&report, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            renderer.render(&report).unwrap()
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = sample_report();
        for format in OutputFormat::ALL {
            let renderer = renderer_for(format);
            assert_eq!(
                renderer.render(&report).unwrap(),
                renderer.render(&report).unwrap()
            );
        }
    }
}
