//! Common types used throughout the Balanza framework.
//!
//! This module defines the balance-sheet inputs a ratio computation consumes,
//! both in their validated numeric form ([`FinancialInputs`]) and as the raw
//! text a user typed into a form ([`RawInputs`]).

use crate::error::ValidationError;
use derive_more::Display;
use serde::{Deserialize, Serialize};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// Identifies one of the six balance-sheet input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Assets convertible to cash within one operating cycle.
    #[display("Current Assets")]
    CurrentAssets,
    /// Obligations due within one operating cycle.
    #[display("Current Liabilities")]
    CurrentLiabilities,
    /// Inventory carried in current assets.
    #[display("Inventory")]
    Inventory,
    /// Total assets on the balance sheet.
    #[display("Total Assets")]
    TotalAssets,
    /// Total liabilities on the balance sheet.
    #[display("Total Liabilities")]
    TotalLiabilities,
    /// Shareholders' equity.
    #[display("Shareholders' Equity")]
    ShareholdersEquity,
}

impl Field {
    /// All fields, in form order.
    pub const ALL: [Self; 6] = [
        Self::CurrentAssets,
        Self::CurrentLiabilities,
        Self::Inventory,
        Self::TotalAssets,
        Self::TotalLiabilities,
        Self::ShareholdersEquity,
    ];

    /// Stable snake_case identifier, matching the serde representation.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CurrentAssets => "current_assets",
            Self::CurrentLiabilities => "current_liabilities",
            Self::Inventory => "inventory",
            Self::TotalAssets => "total_assets",
            Self::TotalLiabilities => "total_liabilities",
            Self::ShareholdersEquity => "shareholders_equity",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Balance-sheet figures for one company, one reporting period, one currency.
///
/// Values may be negative. A computation is only attempted once every field
/// is finite; see [`FinancialInputs::validate`].
///
/// # Example
///
/// ```
/// use balanza_traits::FinancialInputs;
///
/// let inputs = FinancialInputs::new(150.0, 100.0, 30.0, 500.0, 250.0, 250.0);
/// assert!(inputs.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialInputs {
    /// Current assets.
    pub current_assets: f64,
    /// Current liabilities.
    pub current_liabilities: f64,
    /// Inventory.
    pub inventory: f64,
    /// Total assets.
    pub total_assets: f64,
    /// Total liabilities.
    pub total_liabilities: f64,
    /// Shareholders' equity.
    pub shareholders_equity: f64,
}

impl FinancialInputs {
    /// Creates a new set of inputs.
    #[must_use]
    pub const fn new(
        current_assets: f64,
        current_liabilities: f64,
        inventory: f64,
        total_assets: f64,
        total_liabilities: f64,
        shareholders_equity: f64,
    ) -> Self {
        Self {
            current_assets,
            current_liabilities,
            inventory,
            total_assets,
            total_liabilities,
            shareholders_equity,
        }
    }

    /// Returns the value of a single field.
    #[must_use]
    pub const fn get(&self, field: Field) -> f64 {
        match field {
            Field::CurrentAssets => self.current_assets,
            Field::CurrentLiabilities => self.current_liabilities,
            Field::Inventory => self.inventory,
            Field::TotalAssets => self.total_assets,
            Field::TotalLiabilities => self.total_liabilities,
            Field::ShareholdersEquity => self.shareholders_equity,
        }
    }

    /// Iterates over `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.into_iter().map(|f| (f, self.get(f)))
    }

    /// Checks that every field is a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field is NaN or infinite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.iter().all(|(_, v)| v.is_finite()) {
            Ok(())
        } else {
            Err(ValidationError)
        }
    }

    /// Parses raw form text into validated inputs.
    ///
    /// Surrounding whitespace is ignored. Empty fields, non-numeric text,
    /// `NaN` and infinities are all rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if any field fails to parse as a finite number.
    pub fn parse(raw: &RawInputs) -> Result<Self, ValidationError> {
        let mut values = [0.0_f64; 6];
        for field in Field::ALL {
            values[field.index()] = parse_finite(raw.get(field)).ok_or(ValidationError)?;
        }
        let [ca, cl, inv, ta, tl, eq] = values;
        Ok(Self::new(ca, cl, inv, ta, tl, eq))
    }
}

fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Unvalidated field text, as entered into a form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawInputs {
    fields: [String; 6],
}

impl RawInputs {
    /// Creates an empty set of raw inputs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw text of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// Replaces the raw text of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields[field.index()] = value.into();
    }

    /// Builder-style variant of [`RawInputs::set`].
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

impl From<&FinancialInputs> for RawInputs {
    fn from(inputs: &FinancialInputs) -> Self {
        let mut raw = Self::new();
        for (field, value) in inputs.iter() {
            raw.set(field, value.to_string());
        }
        raw
    }
}
