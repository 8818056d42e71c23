//! # Number Formatting
//!
//! Conversions between `f64` values and display strings.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value                      display                                     │
//! │  ─────                      ───────                                     │
//! │  5.0                        "5"        integral: no decimal digits      │
//! │  -0.0                       "0"        negative zero is plain zero      │
//! │  0.05                       "0.05"     shortest round-trip decimal      │
//! │  0.1 + 0.2                  "0.30000000000000004"                       │
//! │  1e21                       "1000000000000000000000"  (no exponent)     │
//! │  inf / NaN                  "Error"                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding is applied beyond what `f64` itself does. This is a
//! four-function calculator, not a decimal engine.

use crate::ERROR_DISPLAY;

/// Formats a computed value for the display.
///
/// ## Example
/// ```rust
/// use abacus_core::format::format_number;
///
/// assert_eq!(format_number(9.0), "9");
/// assert_eq!(format_number(0.5), "0.5");
/// assert_eq!(format_number(-7.0), "-7");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_string();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        // f64's Display is the shortest string that parses back to `value`
        // and never switches to exponent notation.
        value.to_string()
    }
}

/// Parses a display string back into a number.
///
/// Only the display grammar is accepted: an optional leading `-`, digits
/// and at most one `.`. Anything else (the error marker, `inf`, exponent
/// forms) yields `None`.
///
/// ## Example
/// ```rust
/// use abacus_core::format::parse_display;
///
/// assert_eq!(parse_display("12.5"), Some(12.5));
/// assert_eq!(parse_display("5."), Some(5.0));
/// assert_eq!(parse_display("Error"), None);
/// assert_eq!(parse_display("inf"), None);
/// ```
pub fn parse_display(display: &str) -> Option<f64> {
    let digits = display.strip_prefix('-').unwrap_or(display);

    let well_formed = digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;

    if !well_formed {
        return None;
    }

    display.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integral_values() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn test_non_finite_is_error_marker() {
        assert_eq!(format_number(f64::INFINITY), ERROR_DISPLAY);
        assert_eq!(format_number(f64::NAN), ERROR_DISPLAY);
    }

    #[test]
    fn test_parse_rejects_non_display_forms() {
        assert_eq!(parse_display(""), None);
        assert_eq!(parse_display("-"), None);
        assert_eq!(parse_display("."), None);
        assert_eq!(parse_display("1.2.3"), None);
        assert_eq!(parse_display("1e5"), None);
        assert_eq!(parse_display("NaN"), None);
        assert_eq!(parse_display(ERROR_DISPLAY), None);
    }

    #[test]
    fn test_parse_accepts_partial_entry() {
        assert_eq!(parse_display("0."), Some(0.0));
        assert_eq!(parse_display("-0.5"), Some(-0.5));
        assert_eq!(parse_display("007"), Some(7.0));
    }

    proptest! {
        #[test]
        fn formatted_values_round_trip(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
            let shown = format_number(value);
            let parsed = parse_display(&shown);
            prop_assert!(parsed.is_some(), "{} did not parse", shown);
            // -0.0 == 0.0, so negative zero normalisation still round trips
            prop_assert_eq!(parsed.unwrap_or(f64::NAN), value);
        }
    }
}
