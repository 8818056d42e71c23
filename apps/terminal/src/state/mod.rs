//! # State Module
//!
//! Manages application state for the terminal app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐                            │
//! │  │  SessionState    │  │   ConfigState    │                            │
//! │  │                  │  │                  │                            │
//! │  │  Arc<Mutex<      │  │  output mode     │                            │
//! │  │    Session       │  │  show_layout     │                            │
//! │  │  >>              │  │  prompt          │                            │
//! │  └──────────────────┘  └──────────────────┘                            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigState, OutputMode};
pub use session::{Session, SessionState};
