//! Settings file loading for dirxfer.
//!
//! This crate provides the settings types and loading functionality for the
//! dirxfer CLI. Settings are optional: every value has a default, and values
//! given on the command line take precedence over anything loaded here.
//!
//! # Settings File Locations
//!
//! * An explicit path passed with `--config`
//! * `<user config dir>/dirxfer/config.toml` when present
//!
//! # Example
//!
//! ```rust,ignore
//! use dirxfer_config::{discover_settings, load_settings};
//!
//! let settings = match discover_settings(None)? {
//!     Some(path) => load_settings(&path)?,
//!     None => Settings::default(),
//! };
//! println!("default filters: {:?}", settings.filters);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod discovery;
mod error;
mod toml_loader;
mod types;

pub use discovery::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME, discover_settings, user_settings_path};
pub use error::ConfigError;
pub use toml_loader::load_toml_settings;
pub use types::{ModeSetting, Settings};

use std::path::Path;

/// Load a settings file, checking that its format is supported.
///
/// # Arguments
///
/// * `path` - Path to the settings file
///
/// # Errors
///
/// * If the file extension is not `toml`
/// * If the file cannot be read
/// * If the file cannot be parsed
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "toml" => load_toml_settings(path),
        _ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
    }
}
