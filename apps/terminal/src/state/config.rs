//! # Configuration State
//!
//! Stores driver configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ABACUS_*`)
//! 2. Defaults (this file)
//!
//! Log verbosity is not configured here; it follows `RUST_LOG`
//! (see `init_tracing` in lib.rs).
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// How the display is written after each line
    pub output: OutputMode,

    /// Print the keypad layout when the driver starts
    pub show_layout: bool,

    /// Prompt written before each line is read (empty: no prompt)
    pub prompt: String,
}

/// Output format of the driver.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Just the display string, one per line
    #[default]
    Plain,

    /// One JSON object per line (`DisplayResponse`)
    Json,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for piping.
    ///
    /// ## Default Values
    /// - Output: plain
    /// - Layout: hidden
    /// - Prompt: none
    fn default() -> Self {
        ConfigState {
            output: OutputMode::Plain,
            show_layout: false,
            prompt: String::new(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ABACUS_OUTPUT`: `plain` or `json`
    /// - `ABACUS_SHOW_LAYOUT`: `1`/`true`/`yes` to print the keypad on start
    /// - `ABACUS_PROMPT`: prompt string, e.g. `"> "`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(output) = lookup("ABACUS_OUTPUT") {
            match output.trim().to_ascii_lowercase().as_str() {
                "plain" => config.output = OutputMode::Plain,
                "json" => config.output = OutputMode::Json,
                other => warn!(value = %other, "Ignoring unknown ABACUS_OUTPUT"),
            }
        }

        if let Some(flag) = lookup("ABACUS_SHOW_LAYOUT") {
            config.show_layout = parse_flag(&flag);
        }

        if let Some(prompt) = lookup("ABACUS_PROMPT") {
            config.prompt = prompt;
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ConfigState {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), ConfigState::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ABACUS_OUTPUT", "JSON"),
            ("ABACUS_SHOW_LAYOUT", "yes"),
            ("ABACUS_PROMPT", "> "),
        ]);

        assert_eq!(config.output, OutputMode::Json);
        assert!(config.show_layout);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_unknown_output_keeps_default() {
        let config = config_from(&[("ABACUS_OUTPUT", "xml")]);
        assert_eq!(config.output, OutputMode::Plain);
    }

    #[test]
    fn test_flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" On "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }
}
