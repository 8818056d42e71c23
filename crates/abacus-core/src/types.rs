//! # Domain Types
//!
//! The closed set of inputs the calculator understands.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Key        │   │    Operator     │   │    KeyKind      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Digit(0..=9)   │   │  Add       "+"  │   │  Digit          │       │
//! │  │  Decimal        │   │  Subtract  "-"  │   │  Operator       │       │
//! │  │  Operator(op) ──┼──►│  Multiply  "×"  │   │  Function       │       │
//! │  │  Equals         │   │  Divide    "÷"  │   └─────────────────┘       │
//! │  │  Clear          │   └─────────────────┘                             │
//! │  │  Negate         │                                                    │
//! │  │  Percent        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Labels
//! Every key has the label printed on its button. Parsing accepts those
//! labels plus a few ASCII spellings so a plain keyboard can drive the
//! calculator (`*` for `×`, `/` for `÷`, `C` for `AC`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ArithmeticError, CoreError};

// =============================================================================
// Operator
// =============================================================================

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order (top to bottom).
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// ## Errors
    /// - `DivisionByZero` when dividing by zero (either sign)
    /// - `NonFinite` when the result overflows or is NaN
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{ArithmeticError, Operator};
    ///
    /// assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
    /// assert_eq!(
    ///     Operator::Divide.apply(10.0, 0.0),
    ///     Err(ArithmeticError::DivisionByZero)
    /// );
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(ArithmeticError::NonFinite)
        }
    }

    /// Button label.
    pub const fn label(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Key Kind
// =============================================================================

/// Button family. Front ends use it to pick a button style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Digits and the decimal point.
    Digit,
    /// The four operators and equals.
    Operator,
    /// AC, +/- and %.
    Function,
}

// =============================================================================
// Key
// =============================================================================

/// One button press.
///
/// `Digit` carries a value in `0..=9`. The state machine ignores any other
/// value, so a malformed key coming from a front end is a no-op rather
/// than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Negate,
    Percent,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    /// Every distinct key on the keypad.
    pub const ALL: [Key; 19] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Decimal,
        Key::Operator(Operator::Add),
        Key::Operator(Operator::Subtract),
        Key::Operator(Operator::Multiply),
        Key::Operator(Operator::Divide),
        Key::Equals,
        Key::Clear,
        Key::Negate,
        Key::Percent,
    ];

    /// Creates a digit key, or `None` if `value > 9`.
    pub const fn digit(value: u8) -> Option<Key> {
        if value <= 9 {
            Some(Key::Digit(value))
        } else {
            None
        }
    }

    /// Label printed on the button.
    ///
    /// Out-of-range digits have no button and render as `"?"`.
    pub fn label(self) -> &'static str {
        match self {
            Key::Digit(d) => DIGIT_LABELS.get(d as usize).copied().unwrap_or("?"),
            Key::Decimal => ".",
            Key::Operator(op) => op.label(),
            Key::Equals => "=",
            Key::Clear => "AC",
            Key::Negate => "+/-",
            Key::Percent => "%",
        }
    }

    /// Button family of this key.
    pub const fn kind(self) -> KeyKind {
        match self {
            Key::Digit(_) | Key::Decimal => KeyKind::Digit,
            Key::Operator(_) | Key::Equals => KeyKind::Operator,
            Key::Clear | Key::Negate | Key::Percent => KeyKind::Function,
        }
    }

    /// Whether the button spans two keypad columns (only `0`).
    pub const fn is_wide(self) -> bool {
        matches!(self, Key::Digit(0))
    }

    /// Looks up a key by button label or ASCII alias.
    ///
    /// Returns `None` for unknown text. [`FromStr`] wraps this with an error.
    pub fn from_label(label: &str) -> Option<Key> {
        let key = match label {
            "." | "," => Key::Decimal,
            "+" => Key::Operator(Operator::Add),
            "-" | "−" => Key::Operator(Operator::Subtract),
            "×" | "*" | "x" | "X" => Key::Operator(Operator::Multiply),
            "÷" | "/" => Key::Operator(Operator::Divide),
            "=" => Key::Equals,
            "AC" | "ac" | "C" | "c" => Key::Clear,
            "+/-" | "±" | "neg" => Key::Negate,
            "%" => Key::Percent,
            _ => {
                let mut chars = label.chars();
                return match (chars.next(), chars.next()) {
                    (Some(c), None) => c
                        .to_digit(10)
                        .and_then(|d| Key::digit(d as u8)),
                    _ => None,
                };
            }
        };
        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Key {
    type Err = CoreError;

    /// Parses a single button label.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{Key, Operator};
    ///
    /// assert_eq!("×".parse::<Key>().unwrap(), Key::Operator(Operator::Multiply));
    /// assert_eq!("*".parse::<Key>().unwrap(), Key::Operator(Operator::Multiply));
    /// assert!("^".parse::<Key>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Key::from_label(trimmed).ok_or_else(|| CoreError::UnknownKey {
            label: trimmed.to_string(),
            position: 0,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(2.5, 4.0), Ok(10.0));
        assert_eq!(Operator::Divide.apply(7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn test_divide_by_zero_either_sign() {
        assert_eq!(
            Operator::Divide.apply(1.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            Operator::Divide.apply(1.0, -0.0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow_is_non_finite() {
        assert_eq!(
            Operator::Multiply.apply(1e308, 10.0),
            Err(ArithmeticError::NonFinite)
        );
    }

    #[test]
    fn test_labels_round_trip() {
        for key in Key::ALL {
            assert_eq!(key.label().parse::<Key>().unwrap(), key, "label {}", key);
        }
    }

    #[test]
    fn test_ascii_aliases() {
        assert_eq!(Key::from_label("/"), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_label("x"), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_label("C"), Some(Key::Clear));
        assert_eq!(Key::from_label("±"), Some(Key::Negate));
        assert_eq!(Key::from_label("12"), None);
        assert_eq!(Key::from_label(""), None);
    }

    #[test]
    fn test_unknown_label_error() {
        let err = "sqrt".parse::<Key>().unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownKey {
                label: "sqrt".to_string(),
                position: 0
            }
        );
    }

    #[test]
    fn test_key_kinds() {
        assert_eq!(Key::Digit(7).kind(), KeyKind::Digit);
        assert_eq!(Key::Decimal.kind(), KeyKind::Digit);
        assert_eq!(Key::Equals.kind(), KeyKind::Operator);
        assert_eq!(Key::Percent.kind(), KeyKind::Function);
        assert!(Key::Digit(0).is_wide());
        assert!(!Key::Digit(1).is_wide());
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(10), None);
        assert_eq!(Key::Digit(42).label(), "?");
    }

    #[test]
    fn test_key_serialization() {
        let json = serde_json::to_string(&Key::Operator(Operator::Add)).unwrap();
        assert_eq!(json, r#"{"operator":"add"}"#);
        let json = serde_json::to_string(&Key::Clear).unwrap();
        assert_eq!(json, r#""clear""#);
    }
}
