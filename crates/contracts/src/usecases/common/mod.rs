//! Types shared by the wizard use cases.

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;

/// Number typed in a free-text input: spaces (thousands separators) are
/// ignored and a decimal comma is accepted. `None` for empty input, junk and
/// non-finite values such as "NaN" or "inf".
pub fn parse_number(input: &str) -> Option<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lenient amount parsing for the wizards: anything unparsable reads as
/// zero.
pub fn parse_amount(input: &str) -> f64 {
    parse_number(input).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1 250 000"), 1_250_000.0);
        assert_eq!(parse_amount("12,5"), 12.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
    }

    #[test]
    fn test_non_finite_input_reads_as_zero() {
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("-infinity"), 0.0);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("  "), None);
        assert_eq!(parse_number("-12,5"), Some(-12.5));
    }
}
