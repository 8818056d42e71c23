//! # Config Commands
//!
//! Command for retrieving driver configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current configuration.
///
/// ## When Used
/// - `:config` in the driver
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
