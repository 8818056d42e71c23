//! # Keypad Commands
//!
//! Commands that feed keys into the calculator and read the display back.
//!
//! ## Line Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    press_keys("12 + 3 =")                               │
//! │                                                                         │
//! │  validate_input_line ──► keypad::scan ──► lock session ──► press_all    │
//! │        │                      │                                │        │
//! │   too long?              unknown key?                     DisplayResponse
//! │        ▼                      ▼                                         │
//! │   ApiError              ApiError (nothing applied)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use abacus_core::keypad::{scan, KEYPAD};
use abacus_core::validation::validate_input_line;
use abacus_core::{ArithmeticError, CoreError, Key, KeyKind, Outcome};

use crate::error::ApiError;
use crate::state::{Session, SessionState};

/// Display after a command, plus what changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResponse {
    pub session_id: Uuid,
    pub display: String,
    pub changed: bool,
    pub error: Option<ArithmeticError>,
    pub key_count: u64,
}

impl DisplayResponse {
    fn new(session: &Session, outcome: Outcome) -> Self {
        DisplayResponse {
            session_id: session.id,
            display: outcome.display,
            changed: outcome.changed,
            error: outcome.error,
            key_count: session.key_count,
        }
    }
}

/// One button of the keypad layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyCell {
    pub key: Key,
    pub label: String,
    pub kind: KeyKind,
    pub wide: bool,
}

/// Keypad layout, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResponse {
    pub rows: Vec<Vec<KeyCell>>,
}

/// Applies a line of key labels to the session.
///
/// ## Behavior
/// - The whole line is scanned before any key is applied, so a typo
///   leaves the calculator untouched
/// - Keys are applied under one lock acquisition
/// - Division by zero is a successful command whose `error` is set
///
/// ## Arguments
/// * `line` - Key labels, e.g. `"12+3="` or `"7 +/-"`
pub fn press_keys(session: &SessionState, line: &str) -> Result<DisplayResponse, ApiError> {
    let line = validate_input_line(line).map_err(CoreError::from)?;
    let keys = scan(line)?;
    debug!(line = %line, keys = keys.len(), "press_keys command");

    let response = session.with_session_mut(|s| {
        let outcome = s.press_all(&keys);
        DisplayResponse::new(s, outcome)
    })?;

    if let Some(error) = response.error {
        info!(session_id = %response.session_id, %error, "Evaluation failed");
    }

    Ok(response)
}

/// Presses AC.
///
/// ## When Used
/// - `:clear` in the driver
pub fn clear(session: &SessionState) -> Result<DisplayResponse, ApiError> {
    debug!("clear command");

    session.with_session_mut(|s| {
        let outcome = s.press_all(&[Key::Clear]);
        DisplayResponse::new(s, outcome)
    })
}

/// Reads the display without changing anything.
///
/// ## When Used
/// - `:display` in the driver
pub fn get_display(session: &SessionState) -> Result<DisplayResponse, ApiError> {
    debug!("get_display command");

    session.with_session(|s| DisplayResponse {
        session_id: s.id,
        display: s.calculator.display().to_string(),
        changed: false,
        error: None,
        key_count: s.key_count,
    })
}

/// Returns the keypad layout for a front end to render.
pub fn get_layout() -> LayoutResponse {
    debug!("get_layout command");

    let rows = KEYPAD
        .iter()
        .map(|row| {
            row.iter()
                .map(|&key| KeyCell {
                    key,
                    label: key.label().to_string(),
                    kind: key.kind(),
                    wide: key.is_wide(),
                })
                .collect()
        })
        .collect();

    LayoutResponse { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_press_keys_evaluates() {
        let state = SessionState::new();

        let response = press_keys(&state, "2 + 3 =").unwrap();
        assert_eq!(response.display, "5");
        assert!(response.changed);
        assert_eq!(response.error, None);
        assert_eq!(response.key_count, 4);
    }

    #[test]
    fn test_press_keys_across_lines() {
        let state = SessionState::new();

        press_keys(&state, "2+3+").unwrap();
        let response = press_keys(&state, "4=").unwrap();
        assert_eq!(response.display, "9");
    }

    #[test]
    fn test_division_by_zero_is_not_a_command_error() {
        let state = SessionState::new();

        let response = press_keys(&state, "10÷0=").unwrap();
        assert_eq!(response.display, "Error");
        assert_eq!(response.error, Some(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_unknown_key_applies_nothing() {
        let state = SessionState::new();
        press_keys(&state, "12").unwrap();

        let err = press_keys(&state, "3 ^ 4").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidKey);

        let response = get_display(&state).unwrap();
        assert_eq!(response.display, "12");
        assert_eq!(response.key_count, 2);
    }

    #[test]
    fn test_line_too_long() {
        let state = SessionState::new();
        let line = "1".repeat(abacus_core::MAX_INPUT_LINE_LEN + 1);

        let err = press_keys(&state, &line).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_clear() {
        let state = SessionState::new();
        press_keys(&state, "7×").unwrap();

        let response = clear(&state).unwrap();
        assert_eq!(response.display, "0");
        let pending = state
            .with_session(|s| s.calculator.pending_operator())
            .unwrap();
        assert_eq!(pending, None);
    }

    #[test]
    fn test_layout_shape() {
        let layout = get_layout();
        assert_eq!(layout.rows.len(), 5);
        assert_eq!(layout.rows[0][0].label, "AC");
        assert_eq!(layout.rows[0][0].kind, KeyKind::Function);
        assert!(layout.rows[4][0].wide);
        assert_eq!(layout.rows[4].len(), 3);
    }
}
