//! # App Commands
//!
//! Shell-level commands that touch no POS state.

use tracing::debug;

/// Returns the application version from Cargo.toml.
///
/// Shown in the settings footer and attached to support requests.
#[tauri::command]
pub fn get_app_version() -> String {
    debug!("get_app_version command");
    env!("CARGO_PKG_VERSION").to_string()
}
