//! # Abacus Terminal Library
//!
//! Line-driven front end for the abacus calculator. Reads key labels from
//! stdin and writes the display to stdout.
//!
//! ## Module Organization
//! ```text
//! abacus_terminal_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── driver.rs       ◄─── stdin/stdout loop, meta commands
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session state (calculator + metadata)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── keypad.rs   ◄─── press_keys, clear, get_display, get_layout
//! │   ├── session.rs  ◄─── get_snapshot, new_session
//! │   └── config.rs   ◄─── get_config
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Output Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdout   display after each line (plain) or one JSON document (json)   │
//! │  stderr   [CODE] message for rejected lines and arithmetic errors       │
//! │  stderr   tracing output, filtered by RUST_LOG                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod driver;
pub mod error;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use driver::Driver;
use state::{ConfigState, SessionState};

/// Runs the driver on the process's standard streams.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn; override with RUST_LOG                             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ABACUS_OUTPUT, ABACUS_SHOW_LAYOUT, ABACUS_PROMPT                  │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • SessionState: fresh calculator behind a Mutex                     │
/// │                                                                         │
/// │  4. Drive stdin until EOF or :quit ───────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// Returns only I/O failures on the standard streams.
pub fn run() -> io::Result<()> {
    init_tracing();

    info!("Starting Abacus");

    let config = ConfigState::from_env();
    let session = SessionState::new();
    info!(output = ?config.output, show_layout = config.show_layout, "State initialized");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();

    Driver::new(&session, &config).run(stdin.lock(), &mut stdout.lock(), &mut stderr.lock())?;

    info!("Input closed, exiting");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Startup, session changes and evaluation errors
/// - `RUST_LOG=abacus_terminal_lib=debug` - Every command and rejected line
/// - Default: WARN
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
