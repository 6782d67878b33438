//! Merging command-line arguments with loaded settings.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use dirxfer_config::{ConfigError, ModeSetting, Settings, discover_settings, load_settings};
use dirxfer_transfer::{TransferMode, TransferRequest};

use crate::args::Args;

/// Load the settings file selected by `--config` or the per-user default.
///
/// # Errors
///
/// * If an explicit settings file is missing, unreadable or invalid
/// * If the per-user settings file exists but is unreadable or invalid
pub fn load(args: &Args) -> Result<Settings, ConfigError> {
    match discover_settings(args.config.as_deref())? {
        Some(path) => load_settings(&path),
        None => Ok(Settings::default()),
    }
}

/// Build the transfer request. Command-line values win over settings.
#[must_use]
pub fn build_request(args: &Args, settings: &Settings) -> TransferRequest {
    let mode = args
        .mode_override()
        .or_else(|| settings.mode.map(mode_from_setting))
        .unwrap_or_default();

    let filters = if args.filters.is_empty() {
        settings.filters.clone()
    } else {
        args.filters.clone()
    };

    TransferRequest::new(&args.source, &args.destination, mode)
        .with_filters(filters)
        .with_cross_device_fallback(args.cross_device_fallback || settings.cross_device_fallback)
}

const fn mode_from_setting(mode: ModeSetting) -> TransferMode {
    match mode {
        ModeSetting::Copy => TransferMode::Copy,
        ModeSetting::Move => TransferMode::Move,
    }
}
