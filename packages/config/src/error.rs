//! Error types for settings loading.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during settings loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read settings file.
    #[error("Failed to read settings file {}: {source}", path.display())]
    ReadError {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML settings.
    #[error("Failed to parse TOML settings {}: {source}", path.display())]
    TomlParseError {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// An explicitly requested settings file does not exist.
    #[error("Settings file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Unsupported settings format.
    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(String),
}
