//! Settings types for dirxfer.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use serde::Deserialize;

/// Transfer mode as written in a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    /// Duplicate files, leaving the source intact.
    Copy,
    /// Relocate files, removing them from the source.
    Move,
}

/// dirxfer settings.
///
/// Every field is optional so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Mode used when none is given on the command line.
    #[serde(default)]
    pub mode: Option<ModeSetting>,

    /// Filter tokens used when none are given on the command line.
    #[serde(default)]
    pub filters: Vec<String>,

    /// Fall back to copy-then-delete when a move crosses filesystems.
    #[serde(default)]
    pub cross_device_fallback: bool,
}
