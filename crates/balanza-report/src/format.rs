//! Display formatting for amounts, ratios and dates.

use crate::currency::currency_symbol;
use balanza_traits::{Date, RatioResult};

/// Text shown in place of an undefined ratio value.
pub const UNDEFINED_VALUE: &str = "N/A";

/// Formats a number with `,` thousands separators and a fixed number of
/// decimals.
///
/// A value that rounds to zero is shown without a minus sign.
///
/// ```
/// use balanza_report::format::group_thousands;
///
/// assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
/// assert_eq!(group_thousands(-950.0, 0), "-950");
/// ```
#[must_use]
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let negative = value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
    if negative {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Formats a monetary amount with the currency's symbol and two decimals.
///
/// Unrecognised currency codes produce no symbol.
#[must_use]
pub fn format_amount(value: f64, currency_code: &str) -> String {
    let grouped = group_thousands(value, 2);
    let symbol = currency_symbol(currency_code);
    match grouped.strip_prefix('-') {
        Some(unsigned) => format!("-{symbol}{unsigned}"),
        None => format!("{symbol}{grouped}"),
    }
}

/// Formats a ratio value to two decimals, or [`UNDEFINED_VALUE`].
#[must_use]
pub fn format_ratio(result: &RatioResult) -> String {
    result
        .value()
        .map_or_else(|| UNDEFINED_VALUE.to_string(), |v| format!("{v:.2}"))
}

/// Long-form report date, e.g. `October 18, 2026`.
#[must_use]
pub fn format_report_date(date: Date) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use balanza_traits::{Classification, UndefinedReason};

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0, 2), "0.00");
        assert_eq!(group_thousands(999.0, 2), "999.00");
        assert_eq!(group_thousands(1000.0, 2), "1,000.00");
        assert_eq!(group_thousands(123456.5, 1), "123,456.5");
        assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(group_thousands(1000000.0, 0), "1,000,000");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands(-1234.5, 2), "-1,234.50");
        assert_eq!(group_thousands(-0.001, 2), "0.00");
        assert_eq!(group_thousands(-0.0, 2), "0.00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.0, "USD"), "$1,234.00");
        assert_eq!(format_amount(1234.0, "MXN"), "MXN$1,234.00");
        assert_eq!(format_amount(-50.0, "EUR"), "-€50.00");
        assert_eq!(format_amount(1234.0, "XYZ"), "1,234.00");
    }

    #[test]
    fn test_format_ratio() {
        let defined = RatioResult::Defined {
            value: 1.5,
            classification: Classification::Good,
        };
        assert_eq!(format_ratio(&defined), "1.50");

        let undefined = RatioResult::Undefined {
            reason: UndefinedReason::TotalAssetsZero,
        };
        assert_eq!(format_ratio(&undefined), UNDEFINED_VALUE);
    }

    #[test]
    fn test_format_infinite_ratio() {
        let infinite = RatioResult::Defined {
            value: f64::INFINITY,
            classification: Classification::Excellent,
        };
        assert_eq!(format_ratio(&infinite), "inf");
    }

    #[test]
    fn test_format_report_date() {
        let date = Date::from_ymd_opt(2026, 10, 8).unwrap();
        assert_eq!(format_report_date(date), "October 8, 2026");
    }
}
