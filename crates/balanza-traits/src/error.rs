//! Error types for the Balanza framework.
//!
//! This module defines the error types used throughout the Balanza crates.
//! The ratio engine itself only ever fails with [`ValidationError`]; the
//! remaining variants of [`BalanzaError`] cover the presentation layer
//! (dates, currencies, rendering, file output).

use thiserror::Error;

/// User-facing message reported when any input field is not a finite number.
pub const VALIDATION_MESSAGE: &str = "all fields must contain valid numeric values";

/// Raised when one or more required numeric fields cannot be parsed as
/// finite numbers.
///
/// Carries no field detail. Callers show the same single message
/// whichever field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Error)]
#[error("{}", VALIDATION_MESSAGE)]
pub struct ValidationError;

impl ValidationError {
    /// The user-facing message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        VALIDATION_MESSAGE
    }
}

/// The main error type for Balanza operations.
#[derive(Debug, Error)]
pub enum BalanzaError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Error when a date is out of range or malformed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error when a currency code is not recognised.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Error when a ratio is not found in the registry.
    #[error("Ratio not found: {0}")]
    RatioNotFound(String),

    /// Error while rendering a report.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error while reading inputs or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl BalanzaError {
    /// Returns `true` if this is an input validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<String> for BalanzaError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for BalanzaError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for Balanza operations.
///
/// This is a convenience type that uses [`BalanzaError`] as the error type.
pub type Result<T> = std::result::Result<T, BalanzaError>;
