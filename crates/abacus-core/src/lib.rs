//! # abacus-core: Pure Calculator Logic for Abacus
//!
//! This crate is the **heart** of Abacus. It contains the four-function
//! calculator as a pure state machine with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Abacus Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            Front end (terminal driver, web, mobile)             │   │
//! │  │        Keypad ──► key press ──► re-render display               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Key / Outcome                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ abacus-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  keypad   │  │  format   │  │calculator │  │   │
//! │  │   │  Key      │  │  layout   │  │  f64 ⇄    │  │  state    │  │   │
//! │  │   │  Operator │  │  scan()   │  │  display  │  │  machine  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Keys, operators, key kinds
//! - [`keypad`] - Button layout and text-to-key scanning
//! - [`format`] - Number formatting and display parsing
//! - [`calculator`] - The input state machine
//! - [`validation`] - Display invariant and input line checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use abacus_core::{Calculator, Key, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.press(Key::Digit(1));
//! calc.press(Key::Digit(0));
//! calc.press(Key::Operator(Operator::Divide));
//! calc.press(Key::Digit(0));
//! let outcome = calc.press(Key::Equals);
//!
//! assert_eq!(outcome.display, "Error");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod format;
pub mod keypad;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{Calculator, Outcome, Snapshot};
pub use error::{ArithmeticError, CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display at session start and after AC.
pub const DEFAULT_DISPLAY: &str = "0";

/// Display after a failed evaluation. Never parses as a number.
pub const ERROR_DISPLAY: &str = "Error";

/// Longest line the keypad driver accepts, in characters.
pub const MAX_INPUT_LINE_LEN: usize = 256;
