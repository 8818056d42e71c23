//! # Session State
//!
//! Holds the calculator for the current session.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` so that one input line is
//! applied atomically: the display a caller reads back always reflects
//! every key of that line and nothing from another caller.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Driver Input             Command                 Session Change        │
//! │  ────────────             ───────                 ──────────────        │
//! │                                                                         │
//! │  "12+3="  ───────────────► press_keys() ─────────► calculator.press_all │
//! │                                                                         │
//! │  "AC"     ───────────────► press_keys() ─────────► calculator.clear     │
//! │                                                                         │
//! │  ":new"   ───────────────► new_session() ────────► fresh Session        │
//! │                                                                         │
//! │  ":state" ───────────────► get_snapshot() ───────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use abacus_core::{Calculator, Key, Outcome};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;

/// One calculator session.
///
/// Nothing here outlives the session; `:new` replaces the whole record.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session identifier (UUID v4)
    pub id: Uuid,

    /// The calculator state machine
    pub calculator: Calculator,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// When the last key line was applied
    pub last_input_at: Option<DateTime<Utc>>,

    /// Keys pressed in this session
    pub key_count: u64,
}

impl Session {
    /// Starts a fresh session.
    pub fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            calculator: Calculator::new(),
            started_at: Utc::now(),
            last_input_at: None,
            key_count: 0,
        }
    }

    /// Applies keys in order and records the input.
    pub fn press_all(&mut self, keys: &[Key]) -> Outcome {
        let outcome = self.calculator.press_all(keys.iter().copied());
        self.key_count += keys.len() as u64;
        self.last_input_at = Some(Utc::now());
        outcome
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<Session>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one caller modifies the session at a time
///
/// A poisoned lock is reported as `ApiError::internal` instead of panicking.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates state holding a fresh session.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let display = session_state.with_session(|s| s.calculator.display().to_string())?;
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self
            .session
            .lock()
            .map_err(|_| ApiError::internal("Session lock poisoned"))?;
        Ok(f(&session))
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.press_all(&keys))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self
            .session
            .lock()
            .map_err(|_| ApiError::internal("Session lock poisoned"))?;
        Ok(f(&mut session))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::Operator;

    #[test]
    fn test_new_session_is_blank() {
        let session = Session::new();
        assert_eq!(session.calculator.display(), "0");
        assert_eq!(session.key_count, 0);
        assert!(session.last_input_at.is_none());
    }

    #[test]
    fn test_press_all_counts_keys() {
        let mut session = Session::new();
        let outcome = session.press_all(&[
            Key::Digit(2),
            Key::Operator(Operator::Add),
            Key::Digit(3),
            Key::Equals,
        ]);

        assert_eq!(outcome.display, "5");
        assert_eq!(session.key_count, 4);
        assert!(session.last_input_at.is_some());
    }

    #[test]
    fn test_state_shared_between_clones() {
        let state = SessionState::new();
        let other = state.clone();

        state
            .with_session_mut(|s| s.press_all(&[Key::Digit(7)]))
            .unwrap();
        let display = other
            .with_session(|s| s.calculator.display().to_string())
            .unwrap();

        assert_eq!(display, "7");
    }

    #[test]
    fn test_poisoned_lock_is_internal_error() {
        let state = SessionState::new();
        let poisoner = state.clone();

        let _ = std::thread::spawn(move || {
            let _ = poisoner.with_session_mut(|_| panic!("poison the lock"));
        })
        .join();

        let err = state.with_session(|s| s.key_count).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::Internal);
    }
}
