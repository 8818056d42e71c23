//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Abacus                                 │
//! │                                                                         │
//! │  stdin line "2 ^ 3"                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Too long? ───── ValidationError::TooLong ─────────┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Unknown key? ── CoreError::UnknownKey ─────────► ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr: [INVALID_KEY] Unknown key '^' at position 2                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Division by zero is NOT a command failure: the command succeeds and the
//! display shows "Error". The driver still reports it on stderr using the
//! `ARITHMETIC_ERROR` code.

use serde::Serialize;
use thiserror::Error;

use abacus_core::CoreError;

/// API error returned from commands.
///
/// ## Serialization
/// In JSON output mode this is what the driver writes for a failed line:
/// ```json
/// {
///   "code": "INVALID_KEY",
///   "message": "Unknown key '^' at position 2"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Text that is not a keypad label
    InvalidKey,

    /// Input validation failed (line too long, unknown meta command)
    ValidationError,

    /// Evaluation failed (division by zero, overflow)
    ArithmeticError,

    /// Internal error (poisoned session lock)
    Internal,
}

impl ErrorCode {
    /// Wire name of the code, as serialized.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidKey => "INVALID_KEY",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ArithmeticError => "ARITHMETIC_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownKey { .. } => ApiError::new(ErrorCode::InvalidKey, err.to_string()),
            CoreError::Arithmetic(e) => ApiError::new(ErrorCode::ArithmeticError, e.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}
