//! Form state for interactive calculation.
//!
//! [`FormState`] is the single structured value behind a calculator form:
//! six raw numeric fields, the display metadata, and the outcome of the last
//! calculation. A failed calculation always clears the previous result so
//! stale ratios are never shown next to an error.

use crate::currency::Currency;
use crate::report::Report;
use balanza_ratios::RatioEngine;
use balanza_traits::{BalanzaError, Date, Field, FinancialInputs, RatioReport, RawInputs};
use tracing::debug;

/// Everything a calculator form holds.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    raw: RawInputs,
    currency: String,
    company: String,
    report_date: Date,
    default_date: Date,
    inputs: Option<FinancialInputs>,
    result: Option<RatioReport>,
    error: Option<String>,
}

impl FormState {
    /// Creates an empty form whose report date defaults to `today`.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            raw: RawInputs::new(),
            currency: Currency::default().to_string(),
            company: String::new(),
            report_date: today,
            default_date: today,
            inputs: None,
            result: None,
            error: None,
        }
    }

    /// Raw text of a field.
    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        self.raw.get(field)
    }

    /// Sets the raw text of a field.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.raw.set(field, value);
    }

    /// Replaces all six raw fields at once.
    pub fn set_fields(&mut self, raw: RawInputs) {
        self.raw = raw;
    }

    /// Currency code, as entered.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Sets the currency code. Unrecognised codes are kept and display
    /// without a symbol.
    pub fn set_currency(&mut self, code: impl Into<String>) {
        self.currency = code.into().trim().to_uppercase();
    }

    /// Company identifier.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Sets the company identifier.
    pub fn set_company(&mut self, company: impl Into<String>) {
        self.company = company.into();
    }

    /// Report date.
    #[must_use]
    pub const fn report_date(&self) -> Date {
        self.report_date
    }

    /// Sets the report date.
    pub const fn set_report_date(&mut self, date: Date) {
        self.report_date = date;
    }

    /// Ratios from the last successful calculation.
    #[must_use]
    pub const fn result(&self) -> Option<&RatioReport> {
        self.result.as_ref()
    }

    /// Message from the last failed calculation.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Parses the fields and computes the ratios with the standard tables.
    ///
    /// # Errors
    ///
    /// Returns [`BalanzaError::Validation`] when any field is not a finite
    /// number. The message is stored in [`FormState::error`] and any
    /// previous result is discarded.
    pub fn calculate(&mut self) -> Result<&RatioReport, BalanzaError> {
        self.calculate_with(&RatioEngine::default())
    }

    /// Like [`FormState::calculate`] but with a caller-supplied engine.
    ///
    /// # Errors
    ///
    /// Returns [`BalanzaError::Validation`] when any field is not a finite number.
    pub fn calculate_with(&mut self, engine: &RatioEngine) -> Result<&RatioReport, BalanzaError> {
        self.inputs = None;
        self.result = None;
        self.error = None;

        let outcome = FinancialInputs::parse(&self.raw)
            .and_then(|inputs| engine.compute(inputs).map(|report| (inputs, report)));

        match outcome {
            Ok((inputs, report)) => {
                debug!(company = %self.company, "calculation succeeded");
                self.inputs = Some(inputs);
                Ok(self.result.insert(report))
            }
            Err(err) => {
                debug!(company = %self.company, %err, "calculation failed");
                self.error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Resets every field and result to the initial state.
    pub fn clear(&mut self) {
        *self = Self::new(self.default_date);
    }

    /// Snapshot of the last successful calculation for rendering.
    #[must_use]
    pub fn report(&self) -> Option<Report> {
        let inputs = self.inputs?;
        let ratios = self.result?;
        Some(Report::new(
            self.company.clone(),
            self.report_date,
            self.currency.clone(),
            inputs,
            ratios,
        ))
    }
}
