//! # Keypad Driver
//!
//! Reads lines of key labels, runs them through the commands and writes
//! the display back.
//!
//! ## Line Types
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input line         Action                        Output                │
//! │  ──────────         ──────                        ──────                │
//! │  "12 + 3 ="         press_keys                    display (stdout)      │
//! │  ""                 (ignored)                     -                     │
//! │  ":display"         get_display                   display (stdout)      │
//! │  ":clear"           clear                         display (stdout)      │
//! │  ":layout"          get_layout                    keypad (stdout)       │
//! │  ":state"           get_snapshot                  JSON (stdout)         │
//! │  ":config"          get_config                    JSON (stdout)         │
//! │  ":new"             new_session                   session id (stdout)   │
//! │  ":quit" / ":q"     stop reading                  -                     │
//! │  anything invalid   -                             [CODE] msg (stderr)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! In JSON output mode every stdout line is one JSON document.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::debug;

use abacus_core::keypad::render_layout;
use abacus_core::CoreError;

use crate::commands::keypad::DisplayResponse;
use crate::commands::{config, keypad, session};
use crate::error::ApiError;
use crate::state::{ConfigState, OutputMode, SessionState};

/// What to do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Line-oriented front end over the commands.
pub struct Driver<'a> {
    session: &'a SessionState,
    config: &'a ConfigState,
}

impl<'a> Driver<'a> {
    pub fn new(session: &'a SessionState, config: &'a ConfigState) -> Self {
        Driver { session, config }
    }

    /// Processes `input` until end of input or `:quit`.
    ///
    /// Only I/O failures end the loop early; bad lines are reported on `err`
    /// and the next line is read.
    pub fn run<R, W, E>(&self, mut input: R, out: &mut W, err: &mut E) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        if self.config.show_layout {
            self.write_layout(out)?;
        }

        let mut line = String::new();
        loop {
            if !self.config.prompt.is_empty() {
                write!(out, "{}", self.config.prompt)?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            if self.handle_line(&line, out, err)? == Flow::Quit {
                debug!("Quit requested");
                break;
            }
        }

        out.flush()
    }

    fn handle_line<W: Write, E: Write>(&self, line: &str, out: &mut W, err: &mut E) -> io::Result<Flow> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Flow::Continue);
        }

        if let Some(meta) = trimmed.strip_prefix(':') {
            return self.handle_meta(meta.trim(), out, err);
        }

        match keypad::press_keys(self.session, trimmed) {
            Ok(response) => {
                self.write_display(out, &response)?;
                if let Some(error) = response.error {
                    self.report(err, &ApiError::from(CoreError::from(error)))?;
                }
            }
            Err(api_error) => {
                debug!(code = %api_error.code, message = %api_error.message, "Rejected input line");
                self.report(err, &api_error)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn handle_meta<W: Write, E: Write>(&self, meta: &str, out: &mut W, err: &mut E) -> io::Result<Flow> {
        let result = match meta {
            "quit" | "q" | "exit" => return Ok(Flow::Quit),
            "display" => keypad::get_display(self.session).map(|r| self.write_display(out, &r)),
            "clear" => keypad::clear(self.session).map(|r| self.write_display(out, &r)),
            "layout" => Ok(self.write_layout(out)),
            "state" => session::get_snapshot(self.session).map(|r| write_json(out, &r)),
            "config" => Ok(write_json(out, &config::get_config(self.config))),
            "new" => session::new_session(self.session).map(|r| match self.config.output {
                OutputMode::Plain => writeln!(out, "session {}", r.session_id),
                OutputMode::Json => write_json(out, &r),
            }),
            other => Err(ApiError::validation(format!("Unknown command ':{}'", other))),
        };

        match result {
            Ok(written) => written?,
            Err(api_error) => self.report(err, &api_error)?,
        }

        Ok(Flow::Continue)
    }

    fn write_display<W: Write>(&self, out: &mut W, response: &DisplayResponse) -> io::Result<()> {
        match self.config.output {
            OutputMode::Plain => writeln!(out, "{}", response.display),
            OutputMode::Json => write_json(out, response),
        }
    }

    fn write_layout<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.config.output {
            OutputMode::Plain => writeln!(out, "{}", render_layout()),
            OutputMode::Json => write_json(out, &keypad::get_layout()),
        }
    }

    fn report<E: Write>(&self, err: &mut E, api_error: &ApiError) -> io::Result<()> {
        match self.config.output {
            OutputMode::Plain => writeln!(err, "{}", api_error),
            OutputMode::Json => write_json(err, api_error),
        }
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
