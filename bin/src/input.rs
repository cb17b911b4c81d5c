//! Input loading utilities for the Balanza CLI.

use anyhow::{Context, Result};
use balanza_report::FormState;
use balanza_traits::{BalanzaError, Field};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// Contents of a `--input` JSON file.
///
/// Numeric fields may be JSON numbers or strings; anything else is left for
/// the engine to reject.
#[derive(Debug, Deserialize)]
pub(crate) struct InputFile {
    current_assets: Option<Value>,
    current_liabilities: Option<Value>,
    inventory: Option<Value>,
    total_assets: Option<Value>,
    total_liabilities: Option<Value>,
    shareholders_equity: Option<Value>,
    company: Option<String>,
    currency: Option<String>,
    report_date: Option<NaiveDate>,
}

impl InputFile {
    const fn value(&self, field: Field) -> Option<&Value> {
        match field {
            Field::CurrentAssets => self.current_assets.as_ref(),
            Field::CurrentLiabilities => self.current_liabilities.as_ref(),
            Field::Inventory => self.inventory.as_ref(),
            Field::TotalAssets => self.total_assets.as_ref(),
            Field::TotalLiabilities => self.total_liabilities.as_ref(),
            Field::ShareholdersEquity => self.shareholders_equity.as_ref(),
        }
    }

    /// Copies every present field into the form.
    pub(crate) fn apply(&self, form: &mut FormState) {
        for field in Field::ALL {
            if let Some(value) = self.value(field) {
                form.set_field(field, value_text(value));
            }
        }
        if let Some(company) = &self.company {
            form.set_company(company.clone());
        }
        if let Some(currency) = &self.currency {
            form.set_currency(currency.clone());
        }
        if let Some(date) = self.report_date {
            form.set_report_date(date);
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

/// Reads and parses a JSON input file.
pub(crate) fn load_input_file(path: &Path) -> Result<InputFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    let file = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse input file {}", path.display()))?;
    Ok(file)
}

/// Parse a date string in YYYY-MM-DD format.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate, BalanzaError> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|e| BalanzaError::InvalidDate(format!("'{date_str}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use std::io::Write;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_date_invalid() {
        let result = parse_date("15/01/2024");
        assert!(matches!(result, Err(BalanzaError::InvalidDate(_))));
    }

    #[test]
    fn test_load_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "current_assets": 150,
                "current_liabilities": "100",
                "inventory": 30.5,
                "total_assets": 500,
                "total_liabilities": 250,
                "shareholders_equity": 250,
                "company": "Acme",
                "currency": "eur",
                "report_date": "2025-12-31"
            }}"#
        )
        .unwrap();

        let input = load_input_file(file.path()).unwrap();
        let mut form = FormState::new(today());
        input.apply(&mut form);

        assert_eq!(form.field(Field::CurrentAssets), "150");
        assert_eq!(form.field(Field::CurrentLiabilities), "100");
        assert_eq!(form.field(Field::Inventory), "30.5");
        assert_eq!(form.company(), "Acme");
        assert_eq!(form.currency(), "EUR");
        assert_eq!(form.report_date(), NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert!(form.calculate().is_ok());
    }

    #[test]
    fn test_non_numeric_value_fails_validation() {
        let input: InputFile = serde_json::from_str(
            r#"{"current_assets": true, "current_liabilities": 1, "inventory": 1,
                "total_assets": 1, "total_liabilities": 1, "shareholders_equity": 1}"#,
        )
        .unwrap();
        let mut form = FormState::new(today());
        input.apply(&mut form);
        assert!(form.calculate().unwrap_err().is_validation());
    }

    #[test]
    fn test_missing_file() {
        let err = load_input_file(Path::new("/nonexistent/balanza.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
    }
}
