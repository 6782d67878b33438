//! Settings file discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Directory under the user config dir that holds dirxfer settings.
pub const SETTINGS_DIR_NAME: &str = "dirxfer";

/// Settings file name inside [`SETTINGS_DIR_NAME`].
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Path of the per-user settings file, if the platform has a config dir.
#[must_use]
pub fn user_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

/// Find the settings file to load.
///
/// An explicit path must exist. Without one, the per-user settings file is
/// used when present; a missing per-user file is not an error.
///
/// # Arguments
///
/// * `explicit` - Path given with `--config`, if any
///
/// # Errors
///
/// * If `explicit` is given but does not exist
pub fn discover_settings(explicit: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = explicit {
        log::debug!("Using explicit settings file {}", path.display());
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return Ok(Some(path.to_path_buf()));
    }

    let found = user_settings_path().filter(|path| path.is_file());
    match &found {
        Some(path) => log::debug!("Found user settings file {}", path.display()),
        None => log::debug!("No user settings file found"),
    }

    Ok(found)
}
