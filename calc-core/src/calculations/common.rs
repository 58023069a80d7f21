//! Common utility functions for calculator inputs and outputs.
//!
//! This module provides the shared input parsing, rounding and display
//! formatting used by every calculator.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

/// A plain decimal number: optional sign, digits with an optional fraction,
/// and an optional exponent. Thousands separators are removed before matching.
static NUMERIC_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("numeric input pattern is valid")
});

/// Error returned when calculator input is not a usable number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input contains characters that do not form a number.
    #[error("invalid number '{0}'")]
    NotANumber(String),

    /// The input parsed but is infinite or NaN.
    #[error("number '{0}' is out of range")]
    OutOfRange(String),
}

/// Normalizes input for parsing: trims whitespace and removes commas (thousands separator).
fn normalize_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a calculator input field into an `f64`.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::parse_input;
///
/// assert_eq!(parse_input("1,234.5").unwrap(), 1234.5);
/// assert_eq!(parse_input("").unwrap(), 0.0);
/// assert!(parse_input("12abc").is_err());
/// ```
pub fn parse_input(s: &str) -> Result<f64, InputError> {
    let normalized = normalize_input(s);
    if normalized.is_empty() {
        return Ok(0.0);
    }
    if !NUMERIC_INPUT.is_match(&normalized) {
        tracing::debug!(input = %s, "rejected non-numeric input");
        return Err(InputError::NotANumber(s.to_string()));
    }
    let value: f64 = normalized
        .parse()
        .map_err(|_| InputError::NotANumber(s.to_string()))?;
    if !value.is_finite() {
        return Err(InputError::OutOfRange(s.to_string()));
    }
    Ok(value)
}

/// Parses a money input field into a [`Decimal`].
///
/// Follows the same rules as [`parse_input`]: thousands separators are
/// ignored and empty input is 0.
pub fn parse_decimal_input(s: &str) -> Result<Decimal, InputError> {
    let normalized = normalize_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    if !NUMERIC_INPUT.is_match(&normalized) {
        tracing::debug!(input = %s, "rejected non-numeric input");
        return Err(InputError::NotANumber(s.to_string()));
    }
    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        normalized.parse::<Decimal>()
    };
    parsed.map_err(|_| InputError::OutOfRange(s.to_string()))
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a floating point value to `places` decimal places.
///
/// Values too large to scale are returned unchanged.
pub fn round_to(
    value: f64,
    places: u32,
) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Most decimal places [`format_value`] will show.
pub const MAX_DECIMALS: usize = 12;

/// Formats a conversion result for display.
///
/// Rounds to at most `max_decimals` places (capped at [`MAX_DECIMALS`]),
/// trims trailing zeros and groups the integer part with commas. Magnitudes
/// that would round to zero, or that are 1e15 or larger, are shown in
/// scientific notation. Non-finite values display as `0`.
///
/// # Examples
///
/// ```
/// use calc_core::calculations::common::format_value;
///
/// assert_eq!(format_value(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_value(2.5, 4), "2.5");
/// assert_eq!(format_value(0.0000001234, 4), "1.234e-7");
/// ```
pub fn format_value(
    value: f64,
    max_decimals: usize,
) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    let max_decimals = max_decimals.min(MAX_DECIMALS);

    let abs = value.abs();
    let smallest_visible = 0.5 * 10f64.powi(-(max_decimals as i32));
    if abs < smallest_visible || abs >= 1e15 {
        return format_scientific(value);
    }

    let fixed = format!("{:.*}", max_decimals, abs);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn format_scientific(value: f64) -> String {
    let formatted = format!("{value:.4e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let mantissa = if mantissa.contains('.') {
                mantissa.trim_end_matches('0').trim_end_matches('.')
            } else {
                mantissa
            };
            format!("{mantissa}e{exponent}")
        }
        None => formatted,
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_input tests
    // =========================================================================

    #[test]
    fn parse_input_empty_treated_as_zero() {
        assert_eq!(parse_input("").unwrap(), 0.0);
        assert_eq!(parse_input("   ").unwrap(), 0.0);
    }

    #[test]
    fn parse_input_accepts_comma_thousands_separator() {
        assert_eq!(parse_input("1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_input("1,234,567").unwrap(), 1234567.0);
    }

    #[test]
    fn parse_input_accepts_signs_fractions_and_exponents() {
        assert_eq!(parse_input("-40").unwrap(), -40.0);
        assert_eq!(parse_input("+2.5").unwrap(), 2.5);
        assert_eq!(parse_input(".5").unwrap(), 0.5);
        assert_eq!(parse_input("5.").unwrap(), 5.0);
        assert_eq!(parse_input("1.5e3").unwrap(), 1500.0);
    }

    #[test]
    fn parse_input_rejects_non_numeric_characters() {
        assert_eq!(
            parse_input("12abc"),
            Err(InputError::NotANumber("12abc".to_string()))
        );
        assert!(parse_input("1.2.3").is_err());
        assert!(parse_input("--5").is_err());
        assert!(parse_input("NaN").is_err());
        assert!(parse_input("inf").is_err());
    }

    #[test]
    fn parse_input_rejects_overflowing_exponent() {
        assert_eq!(
            parse_input("1e999"),
            Err(InputError::OutOfRange("1e999".to_string()))
        );
    }

    // =========================================================================
    // parse_decimal_input tests
    // =========================================================================

    #[test]
    fn parse_decimal_input_handles_comma_and_empty() {
        assert_eq!(parse_decimal_input("10,000.50").unwrap(), dec!(10000.50));
        assert_eq!(parse_decimal_input("").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_input_accepts_scientific_notation() {
        assert_eq!(parse_decimal_input("2.5e3").unwrap(), dec!(2500));
    }

    #[test]
    fn parse_decimal_input_rejects_letters() {
        assert!(parse_decimal_input("$100").is_err());
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
    }

    // =========================================================================
    // round_to tests
    // =========================================================================

    #[test]
    fn round_to_rounds_to_requested_places() {
        assert_eq!(round_to(2.204622621, 5), 2.20462);
        assert_eq!(round_to(3.6000000000000005, 6), 3.6);
    }

    #[test]
    fn round_to_leaves_huge_values_untouched() {
        assert_eq!(round_to(1e308, 6), 1e308);
    }

    // =========================================================================
    // format_value tests
    // =========================================================================

    #[test]
    fn format_value_groups_thousands() {
        assert_eq!(format_value(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_value(100.0, 2), "100");
        assert_eq!(format_value(1000.0, 2), "1,000");
    }

    #[test]
    fn format_value_caps_decimal_places() {
        assert_eq!(format_value(1.0 / 3.0, usize::MAX), "0.333333333333");
        assert_eq!(format_value(2.5, 1_000_000), "2.5");
    }

    #[test]
    fn format_value_trims_trailing_zeros() {
        assert_eq!(format_value(2.5, 6), "2.5");
        assert_eq!(format_value(32.0, 4), "32");
    }

    #[test]
    fn format_value_keeps_negative_sign() {
        assert_eq!(format_value(-40.0, 2), "-40");
        assert_eq!(format_value(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn format_value_shows_zero_for_zero_and_non_finite() {
        assert_eq!(format_value(0.0, 2), "0");
        assert_eq!(format_value(-0.0, 2), "0");
        assert_eq!(format_value(f64::NAN, 2), "0");
        assert_eq!(format_value(f64::INFINITY, 2), "0");
    }

    #[test]
    fn format_value_uses_scientific_for_tiny_and_huge_values() {
        assert_eq!(format_value(0.0000001234, 4), "1.234e-7");
        assert_eq!(format_value(2.0e20, 2), "2e20");
    }
}
