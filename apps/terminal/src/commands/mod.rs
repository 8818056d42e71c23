//! # Commands Module
//!
//! Every operation the driver (or any other front end) can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── keypad.rs   ◄─── press_keys, clear, get_display, get_layout
//! ├── session.rs  ◄─── get_snapshot, new_session
//! └── config.rs   ◄─── get_config
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn press_keys(session: &SessionState, line: &str)
//!
//! // Needs no state at all
//! fn get_layout()
//!
//! // Only needs config
//! fn get_config(config: &ConfigState)
//! ```

pub mod config;
pub mod keypad;
pub mod session;
