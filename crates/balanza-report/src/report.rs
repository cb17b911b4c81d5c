//! The report model consumed by renderers.
//!
//! A [`Report`] is a snapshot of one successful calculation together with the
//! display metadata collected by the form: company name, report date and
//! currency. Renderers consume the pre-formatted [`RatioLine`] and
//! [`InputLine`] views so every output format shows identical text.

use crate::format::{format_amount, format_ratio, format_report_date};
use balanza_traits::{
    Classification, Date, Field, FinancialInputs, RatioKind, RatioReport, Result,
};
use serde::Serialize;

/// One calculation, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Free-text company identifier.
    pub company: String,
    /// Reporting date.
    pub report_date: Date,
    /// Currency code used to annotate amounts; may be unrecognised.
    pub currency: String,
    /// The validated inputs.
    pub inputs: FinancialInputs,
    /// The computed ratios.
    pub ratios: RatioReport,
}

/// Display view of one ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatioLine {
    /// Which ratio.
    pub kind: RatioKind,
    /// Display name, e.g. `Current Ratio`.
    pub name: String,
    /// Rounded value, `None` when undefined.
    pub value: Option<f64>,
    /// Value as displayed.
    pub display_value: String,
    /// Classification, `None` when undefined.
    pub classification: Option<Classification>,
    /// Classification label or zero-denominator message.
    pub interpretation: String,
}

/// Display view of one input field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputLine {
    /// Which field.
    pub field: Field,
    /// Display label, e.g. `Total Assets`.
    pub label: String,
    /// Raw value.
    pub value: f64,
    /// Currency-annotated value.
    pub display_value: String,
}

impl Report {
    /// Creates a report from already computed ratios.
    #[must_use]
    pub fn new(
        company: impl Into<String>,
        report_date: Date,
        currency: impl Into<String>,
        inputs: FinancialInputs,
        ratios: RatioReport,
    ) -> Self {
        Self {
            company: company.into(),
            report_date,
            currency: currency.into(),
            inputs,
            ratios,
        }
    }

    /// Computes the ratios and builds a report.
    ///
    /// # Errors
    ///
    /// Returns [`balanza_traits::BalanzaError::Validation`] if any input is not finite.
    pub fn compute(
        company: impl Into<String>,
        report_date: Date,
        currency: impl Into<String>,
        inputs: FinancialInputs,
    ) -> Result<Self> {
        let ratios = balanza_ratios::compute(inputs)?;
        Ok(Self::new(company, report_date, currency, inputs, ratios))
    }

    /// Company name, or a placeholder when blank.
    #[must_use]
    pub fn company_display(&self) -> &str {
        let name = self.company.trim();
        if name.is_empty() { "Unnamed company" } else { name }
    }

    /// Long-form report date.
    #[must_use]
    pub fn date_display(&self) -> String {
        format_report_date(self.report_date)
    }

    /// Ratio lines in report order.
    #[must_use]
    pub fn ratio_lines(&self) -> Vec<RatioLine> {
        self.ratios
            .iter()
            .map(|(kind, result)| RatioLine {
                kind,
                name: kind.to_string(),
                value: result.value(),
                display_value: format_ratio(result),
                classification: result.classification(),
                interpretation: result.interpretation(),
            })
            .collect()
    }

    /// Input lines in form order, annotated with the currency symbol.
    #[must_use]
    pub fn input_lines(&self) -> Vec<InputLine> {
        self.inputs
            .iter()
            .map(|(field, value)| InputLine {
                field,
                label: field.to_string(),
                value,
                display_value: format_amount(value, &self.currency),
            })
            .collect()
    }
}
