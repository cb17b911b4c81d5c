//! Currency codes and display symbols.
//!
//! Currencies only affect how amounts are displayed, never how ratios are
//! computed. Codes outside [`Currency::ALL`] display without a symbol.

use balanza_traits::BalanzaError;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A recognised ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar
    #[default]
    #[display("USD")]
    Usd,
    /// Mexican peso
    #[display("MXN")]
    Mxn,
    /// Euro
    #[display("EUR")]
    Eur,
    /// Japanese yen
    #[display("JPY")]
    Jpy,
    /// Pound sterling
    #[display("GBP")]
    Gbp,
    /// Canadian dollar
    #[display("CAD")]
    Cad,
    /// Australian dollar
    #[display("AUD")]
    Aud,
    /// Swiss franc
    #[display("CHF")]
    Chf,
    /// Chinese yuan
    #[display("CNY")]
    Cny,
    /// Indian rupee
    #[display("INR")]
    Inr,
    /// Brazilian real
    #[display("BRL")]
    Brl,
    /// Russian ruble
    #[display("RUB")]
    Rub,
    /// South African rand
    #[display("ZAR")]
    Zar,
}

impl Currency {
    /// All recognised currencies, in display order.
    pub const ALL: [Self; 13] = [
        Self::Usd,
        Self::Mxn,
        Self::Eur,
        Self::Jpy,
        Self::Gbp,
        Self::Cad,
        Self::Aud,
        Self::Chf,
        Self::Cny,
        Self::Inr,
        Self::Brl,
        Self::Rub,
        Self::Zar,
    ];

    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Mxn => "MXN$",
            Self::Eur => "€",
            Self::Jpy | Self::Cny => "¥",
            Self::Gbp => "£",
            Self::Cad => "C$",
            Self::Aud => "A$",
            Self::Chf => "CHF",
            Self::Inr => "₹",
            Self::Brl => "R$",
            Self::Rub => "₽",
            Self::Zar => "R",
        }
    }

    /// English name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Usd => "US Dollar",
            Self::Mxn => "Mexican Peso",
            Self::Eur => "Euro",
            Self::Jpy => "Japanese Yen",
            Self::Gbp => "British Pound",
            Self::Cad => "Canadian Dollar",
            Self::Aud => "Australian Dollar",
            Self::Chf => "Swiss Franc",
            Self::Cny => "Chinese Yuan",
            Self::Inr => "Indian Rupee",
            Self::Brl => "Brazilian Real",
            Self::Rub => "Russian Ruble",
            Self::Zar => "South African Rand",
        }
    }
}

impl FromStr for Currency {
    type Err = BalanzaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(code))
            .ok_or_else(|| BalanzaError::UnknownCurrency(code.to_string()))
    }
}

/// Display symbol for a currency code; empty for unrecognised codes.
#[must_use]
pub fn currency_symbol(code: &str) -> &'static str {
    code.parse::<Currency>().map_or("", |c| c.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        let expected = [
            ("USD", "$"),
            ("MXN", "MXN$"),
            ("EUR", "€"),
            ("JPY", "¥"),
            ("GBP", "£"),
            ("CAD", "C$"),
            ("AUD", "A$"),
            ("CHF", "CHF"),
            ("CNY", "¥"),
            ("INR", "₹"),
            ("BRL", "R$"),
            ("RUB", "₽"),
            ("ZAR", "R"),
        ];
        for (code, symbol) in expected {
            assert_eq!(currency_symbol(code), symbol, "{code}");
        }
    }

    #[test]
    fn test_unrecognised_code_has_no_symbol() {
        assert_eq!(currency_symbol("XYZ"), "");
        assert_eq!(currency_symbol(""), "");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("eur".parse::<Currency>().unwrap(), Currency::Eur);
        assert_eq!(" gbp ".parse::<Currency>().unwrap(), Currency::Gbp);
        assert!(matches!(
            "BTC".parse::<Currency>(),
            Err(BalanzaError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(Currency::default(), Currency::Usd);
        assert_eq!(Currency::Zar.to_string(), "ZAR");
        assert_eq!(Currency::Inr.name(), "Indian Rupee");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Brl).unwrap(), "\"BRL\"");
        let parsed: Currency = serde_json::from_str("\"CAD\"").unwrap();
        assert_eq!(parsed, Currency::Cad);
    }
}
