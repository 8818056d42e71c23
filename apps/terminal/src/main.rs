//! # Abacus Entry Point
//!
//! ```text
//! $ printf '12+3=\n×2=\n' | abacus
//! 15
//! 30
//! ```
//!
//! The actual setup is in lib.rs so the driver can be tested without a
//! process.

use std::process::ExitCode;

fn main() -> ExitCode {
    match abacus_terminal_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("abacus: {}", err);
            ExitCode::FAILURE
        }
    }
}
