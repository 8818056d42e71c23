//! # Session Commands
//!
//! Inspect the current session or start a new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use abacus_core::Snapshot;

use crate::error::ApiError;
use crate::state::{Session, SessionState};

/// Session metadata plus the full calculator snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub last_input_at: Option<DateTime<Utc>>,
    pub key_count: u64,
    pub snapshot: Snapshot,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        SessionResponse {
            session_id: session.id,
            started_at: session.started_at,
            last_input_at: session.last_input_at,
            key_count: session.key_count,
            snapshot: session.calculator.snapshot(),
        }
    }
}

/// Returns the current session and calculator state.
pub fn get_snapshot(session: &SessionState) -> Result<SessionResponse, ApiError> {
    debug!("get_snapshot command");
    session.with_session(|s| SessionResponse::from(s))
}

/// Discards the current session and starts a new one.
///
/// ## When Used
/// - `:new` in the driver
///
/// Unlike AC, this also mints a new session id and resets the key count.
pub fn new_session(session: &SessionState) -> Result<SessionResponse, ApiError> {
    let response = session.with_session_mut(|s| {
        let previous = s.id;
        *s = Session::new();
        info!(previous = %previous, session_id = %s.id, "Started new session");
        SessionResponse::from(&*s)
    })?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::keypad::press_keys;
    use abacus_core::Operator;

    #[test]
    fn test_snapshot_reflects_pending() {
        let state = SessionState::new();
        press_keys(&state, "6×").unwrap();

        let response = get_snapshot(&state).unwrap();
        assert_eq!(response.snapshot.display, "6");
        assert_eq!(response.snapshot.pending_operator, Some(Operator::Multiply));
        assert_eq!(response.key_count, 2);
        assert!(response.last_input_at.is_some());
    }

    #[test]
    fn test_new_session_resets_everything() {
        let state = SessionState::new();
        let before = get_snapshot(&state).unwrap();
        press_keys(&state, "1+2").unwrap();

        let after = new_session(&state).unwrap();
        assert_ne!(after.session_id, before.session_id);
        assert_eq!(after.key_count, 0);
        assert_eq!(after.snapshot.display, "0");
        assert_eq!(after.snapshot.pending_operator, None);
    }

    #[test]
    fn test_clear_keeps_session_id() {
        let state = SessionState::new();
        let before = get_snapshot(&state).unwrap();
        press_keys(&state, "5 AC").unwrap();

        let after = get_snapshot(&state).unwrap();
        assert_eq!(after.session_id, before.session_id);
        assert_eq!(after.snapshot.display, "0");
    }
}
