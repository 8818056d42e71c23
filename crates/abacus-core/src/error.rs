//! # Error Types
//!
//! Domain-specific error types for abacus-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  abacus-core errors (this file)                                        │
//! │  ├── CoreError        - Anything a caller can get back as Err          │
//! │  ├── ArithmeticError  - Evaluation failures (shown as "Error")         │
//! │  └── ValidationError  - Malformed display strings / input lines        │
//! │                                                                         │
//! │  abacus-terminal errors (in app)                                       │
//! │  └── ApiError         - What the driver reports (code + message)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Arithmetic Errors Are Not Returned
//! The state machine never returns `Err` for a key press. An
//! `ArithmeticError` replaces the display with the error marker and is
//! reported through [`Outcome::error`](crate::Outcome).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Core Error
// =============================================================================

/// Errors returned by fallible core operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Input text did not match any keypad label.
    ///
    /// ## When This Occurs
    /// - A driver line contains a character with no button (e.g. `"2^3"`)
    /// - A single label string is not recognised by `Key::from_str`
    #[error("Unknown key '{label}' at position {position}")]
    UnknownKey { label: String, position: usize },

    /// Evaluation failed.
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Arithmetic Error
// =============================================================================

/// Failures of a single binary evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticError {
    /// Right-hand operand of a division was zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Result overflowed to infinity or is not a number.
    #[error("Result is not a finite number")]
    NonFinite,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., two decimal points in the display).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownKey {
            label: "^".to_string(),
            position: 1,
        };
        assert_eq!(err.to_string(), "Unknown key '^' at position 1");

        let err = CoreError::from(ArithmeticError::DivisionByZero);
        assert_eq!(err.to_string(), "Arithmetic error: Division by zero");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "display".to_string(),
        };
        assert_eq!(err.to_string(), "display is required");

        let err = ValidationError::TooLong {
            field: "line".to_string(),
            max: 256,
        };
        assert_eq!(err.to_string(), "line must be at most 256 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "display".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_arithmetic_error_serializes_snake_case() {
        let json = serde_json::to_string(&ArithmeticError::DivisionByZero).unwrap();
        assert_eq!(json, "\"division_by_zero\"");
    }
}
