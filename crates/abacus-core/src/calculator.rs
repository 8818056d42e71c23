//! # Calculator State Machine
//!
//! Consumes one key at a time and updates the display and pending
//! operation. Arithmetic is immediate-execution: pressing an operator
//! resolves the operation already pending before storing the new one.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Calculator                                                             │
//! │  ├── display  "0" | typed digits | formatted result | "Error"          │
//! │  ├── pending  Option<(operand, operator)>  set and cleared as a pair    │
//! │  └── typing   display holds keystrokes (true) or a settled value       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Session
//! ```text
//!  key   display   pending     typing
//!  ───   ───────   ───────     ──────
//!  2     "2"       -           true
//!  +     "2"       (2, +)      false
//!  3     "3"       (2, +)      true
//!  +     "5"       (5, +)      false    ◄── 2 + 3 resolved here
//!  4     "4"       (5, +)      true
//!  =     "9"       -           false
//! ```
//!
//! ## Error State
//! Division by zero, an overflowing result, or a typed number too large
//! for `f64` puts `"Error"` on the display and drops the pending operation. While the error is shown,
//! operators and equals are ignored; a digit or `.` starts a new number
//! and `AC` resets.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ArithmeticError;
use crate::format::{format_number, parse_display};
use crate::types::{Key, Operator};
use crate::validation::validate_display;
use crate::{DEFAULT_DISPLAY, ERROR_DISPLAY};

/// Left operand and operator waiting for the right operand.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    operand: f64,
    operator: Operator,
}

/// The calculator's session state.
///
/// Construct with [`Calculator::new`]; drive with [`Calculator::press`] or
/// the by-value [`Calculator::transition`].
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    pending: Option<Pending>,
    typing: bool,
}

/// Result of handling one key (or one batch of keys).
///
/// Front ends re-render when `changed` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    /// Display after the key was handled.
    pub display: String,
    /// Whether any part of the state changed.
    pub changed: bool,
    /// Arithmetic error raised by this key, if any.
    pub error: Option<ArithmeticError>,
}

/// Read-only view of the full state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub display: String,
    pub pending_operand: Option<f64>,
    pub pending_operator: Option<Operator>,
    pub typing: bool,
    pub is_error: bool,
}

impl Calculator {
    /// Creates a calculator showing `"0"` with nothing pending.
    pub fn new() -> Self {
        Calculator {
            display: DEFAULT_DISPLAY.to_string(),
            pending: None,
            typing: false,
        }
    }

    /// Current display string.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand of the pending operation.
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// Operator of the pending operation.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Whether the display holds digits the user is still typing.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Whether the display shows the error marker.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Copies the state into a serialisable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            pending_operand: self.pending_operand(),
            pending_operator: self.pending_operator(),
            typing: self.typing,
            is_error: self.is_error(),
        }
    }

    /// Pure transition: consumes the state and returns the next one.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{Calculator, Key, Operator};
    ///
    /// let calc = Calculator::new();
    /// let (calc, _) = calc.transition(Key::Digit(2));
    /// let (calc, _) = calc.transition(Key::Operator(Operator::Add));
    /// let (calc, _) = calc.transition(Key::Digit(3));
    /// let (calc, outcome) = calc.transition(Key::Equals);
    ///
    /// assert_eq!(outcome.display, "5");
    /// assert_eq!(calc.display(), "5");
    /// ```
    pub fn transition(mut self, key: Key) -> (Calculator, Outcome) {
        let outcome = self.press(key);
        (self, outcome)
    }

    /// Handles one key press in place.
    pub fn press(&mut self, key: Key) -> Outcome {
        let before = self.clone();
        let error = self.apply(key);

        debug_assert!(
            validate_display(&self.display).is_ok(),
            "display invariant broken by {:?}: {:?}",
            key,
            self.display
        );

        Outcome {
            display: self.display.clone(),
            changed: *self != before,
            error,
        }
    }

    /// Handles a batch of keys in order.
    ///
    /// `changed` is true if any key changed the state; `error` is the last
    /// arithmetic error raised in the batch.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{keypad, Calculator};
    ///
    /// let mut calc = Calculator::new();
    /// let outcome = calc.press_all(keypad::scan("2+3+4=").unwrap());
    /// assert_eq!(outcome.display, "9");
    /// ```
    pub fn press_all<I>(&mut self, keys: I) -> Outcome
    where
        I: IntoIterator<Item = Key>,
    {
        let mut changed = false;
        let mut error = None;

        for key in keys {
            let outcome = self.press(key);
            changed |= outcome.changed;
            if outcome.error.is_some() {
                error = outcome.error;
            }
        }

        Outcome {
            display: self.display.clone(),
            changed,
            error,
        }
    }

    /// Resets every field to its initial value.
    pub fn clear(&mut self) {
        *self = Calculator::new();
    }

    // =========================================================================
    // Key handlers
    // =========================================================================

    fn apply(&mut self, key: Key) -> Option<ArithmeticError> {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => return self.input_operator(op),
            Key::Equals => return self.evaluate(),
            Key::Clear => self.clear(),
            Key::Negate => return self.map_value(|v| -v),
            Key::Percent => return self.map_value(|v| v / 100.0),
        }
        None
    }

    fn input_digit(&mut self, digit: u8) {
        let Some(key) = Key::digit(digit) else {
            return;
        };
        let label = key.label();

        if !self.typing {
            self.display = label.to_string();
            self.typing = true;
        } else if self.display == DEFAULT_DISPLAY {
            self.display = label.to_string();
        } else {
            self.display.push_str(label);
        }
    }

    fn input_decimal(&mut self) {
        if self.is_error() {
            self.display = "0.".to_string();
            self.typing = true;
        } else if !self.display.contains('.') {
            self.display.push('.');
            self.typing = true;
        }
    }

    fn input_operator(&mut self, operator: Operator) -> Option<ArithmeticError> {
        if self.is_error() {
            return None;
        }

        let current = match self.current_value() {
            Ok(value) => value,
            Err(err) => {
                self.fail();
                return Some(err);
            }
        };

        let operand = match self.pending {
            Some(pending) if self.typing => {
                match pending.operator.apply(pending.operand, current) {
                    Ok(result) => {
                        self.display = format_number(result);
                        result
                    }
                    Err(err) => {
                        self.fail();
                        return Some(err);
                    }
                }
            }
            _ => current,
        };

        self.pending = Some(Pending { operand, operator });
        self.typing = false;
        None
    }

    fn evaluate(&mut self) -> Option<ArithmeticError> {
        if self.is_error() {
            return None;
        }
        let pending = self.pending?;

        let result = self
            .current_value()
            .and_then(|current| pending.operator.apply(pending.operand, current));

        match result {
            Ok(result) => {
                self.display = format_number(result);
                self.pending = None;
                self.typing = false;
                None
            }
            Err(err) => {
                self.fail();
                Some(err)
            }
        }
    }

    fn map_value(&mut self, f: impl FnOnce(f64) -> f64) -> Option<ArithmeticError> {
        let result = f(parse_display(&self.display)?);

        if !result.is_finite() {
            self.fail();
            return Some(ArithmeticError::NonFinite);
        }

        self.display = format_number(result);
        None
    }

    fn fail(&mut self) {
        self.display = ERROR_DISPLAY.to_string();
        self.pending = None;
        self.typing = false;
    }

    /// Numeric value of the display; unparseable text counts as zero.
    ///
    /// A typed number too long for `f64` is `NonFinite`.
    fn current_value(&self) -> Result<f64, ArithmeticError> {
        let value = parse_display(&self.display).unwrap_or(0.0);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ArithmeticError::NonFinite)
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
