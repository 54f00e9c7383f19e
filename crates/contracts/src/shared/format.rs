//! Display formatting for amounts, dates and percentages.

use chrono::NaiveDate;

/// Currency suffix of every amount in the suite (franc CFA).
pub const CURRENCY: &str = "FCFA";

/// Formats a number with a space thousands separator and the given number
/// of decimals (0..=3, anything else falls back to 2).
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    };
    // Values that round to zero lose their sign: -0.4 renders as "0".
    let formatted = match formatted.strip_prefix('-') {
        Some(digits) if digits.chars().all(|c| c == '0' || c == '.') => digits.to_string(),
        _ => formatted,
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// Amount in francs CFA, without decimals: `1 250 000 FCFA`.
pub fn format_amount(value: f64) -> String {
    format!("{} {}", format_number_with_decimals(value, 0), CURRENCY)
}

/// Integer with thousands separator.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// `ratio` of 0.153 renders as `15.3 %`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1} %", ratio * 100.0)
}

/// DD/MM/YYYY.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "—".to_string())
}

/// Parses the `yyyy-mm-dd` value of an `<input type="date">`. Empty or
/// malformed input yields `None`.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Inverse of [`parse_input_date`].
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(parse_input_date(" 2024-02-29 "), Some(date));
        assert_eq!(parse_input_date("29/02/2024"), None);
        assert_eq!(parse_input_date(""), None);
        assert_eq!(format_input_date(date), "2024-02-29");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1_250_000.0), "1 250 000 FCFA");
        assert_eq!(format_amount(0.0), "0 FCFA");
        assert_eq!(format_amount(-45_300.0), "-45 300 FCFA");
        assert_eq!(format_amount(999.6), "1 000 FCFA");
    }

    #[test]
    fn test_negative_values_rounding_to_zero_lose_the_sign() {
        assert_eq!(format_amount(-0.4), "0 FCFA");
        assert_eq!(format_amount(-0.0), "0 FCFA");
        assert_eq!(format_number_with_decimals(-0.004, 2), "0.00");
        assert_eq!(format_amount(-0.6), "-1 FCFA");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1 234.567");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.153), "15.3 %");
        assert_eq!(format_percent(1.0), "100.0 %");
    }

    #[test]
    fn test_format_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15/03/2024");
        assert_eq!(format_optional_date(None), "—");
    }
}
