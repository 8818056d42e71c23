//! # Validation Module
//!
//! Input validation utilities for Abacus.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Driver (abacus-terminal)                                     │
//! │  └── validate_input_line: length cap before scanning                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Keypad scanner                                               │
//! │  └── Unknown characters rejected with their position                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: State machine                                                │
//! │  └── validate_display: the display invariant holds after every key     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{ERROR_DISPLAY, MAX_INPUT_LINE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a display string.
///
/// ## Rules
/// - Must not be empty
/// - Either the error marker, or: optional leading `-`, at least one digit,
///   only digits and `.` after that, and at most one `.`
///
/// ## Example
/// ```rust
/// use abacus_core::validation::validate_display;
///
/// assert!(validate_display("0").is_ok());
/// assert!(validate_display("-12.").is_ok());
/// assert!(validate_display("Error").is_ok());
/// assert!(validate_display("1.2.3").is_err());
/// ```
pub fn validate_display(display: &str) -> ValidationResult<()> {
    if display.is_empty() {
        return Err(ValidationError::Required {
            field: "display".to_string(),
        });
    }

    if display == ERROR_DISPLAY {
        return Ok(());
    }

    let body = display.strip_prefix('-').unwrap_or(display);

    if body.matches('.').count() > 1 {
        return Err(invalid_display("more than one decimal point"));
    }

    if !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(invalid_display("only digits, '.' and a leading '-' are allowed"));
    }

    if !body.chars().any(|c| c.is_ascii_digit()) {
        return Err(invalid_display("must contain a digit"));
    }

    Ok(())
}

/// Validates one line of driver input.
///
/// ## Rules
/// - Maximum `MAX_INPUT_LINE_LEN` characters after trimming
///
/// ## Returns
/// The trimmed line.
pub fn validate_input_line(line: &str) -> ValidationResult<&str> {
    let line = line.trim();

    if line.chars().count() > MAX_INPUT_LINE_LEN {
        return Err(ValidationError::TooLong {
            field: "line".to_string(),
            max: MAX_INPUT_LINE_LEN,
        });
    }

    Ok(line)
}

fn invalid_display(reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "display".to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_valid() {
        for display in ["0", "7", "-7", "0.", "0.05", "123456789", ERROR_DISPLAY] {
            assert!(validate_display(display).is_ok(), "{} should be valid", display);
        }
    }

    #[test]
    fn test_display_empty() {
        assert!(matches!(
            validate_display(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_display_invalid() {
        for display in ["1..2", "1.2.3", "--1", "-", ".", "1e5", "inf", "error"] {
            assert!(
                matches!(
                    validate_display(display),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "{} should be invalid",
                display
            );
        }
    }

    #[test]
    fn test_input_line_trimmed() {
        assert_eq!(validate_input_line("  2 + 3 =  \n").unwrap(), "2 + 3 =");
    }

    #[test]
    fn test_input_line_too_long() {
        let line = "1".repeat(MAX_INPUT_LINE_LEN + 1);
        assert!(matches!(
            validate_input_line(&line),
            Err(ValidationError::TooLong { max, .. }) if max == MAX_INPUT_LINE_LEN
        ));

        let line = "1".repeat(MAX_INPUT_LINE_LEN);
        assert!(validate_input_line(&line).is_ok());
    }
}
