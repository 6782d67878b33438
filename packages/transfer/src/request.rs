//! Transfer request: the immutable description of one run.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Whether files are duplicated or relocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferMode {
    /// Duplicate files, leaving the source intact.
    #[default]
    Copy,
    /// Relocate files, removing them from the source.
    Move,
}

impl TransferMode {
    /// Past-tense verb for summaries ("copied" / "moved").
    #[must_use]
    pub const fn past_tense(self) -> &'static str {
        match self {
            Self::Copy => "copied",
            Self::Move => "moved",
        }
    }
}

impl std::fmt::Display for TransferMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "copy"),
            Self::Move => write!(f, "move"),
        }
    }
}

/// Everything a single run needs to know.
///
/// Built once by the caller and only ever borrowed by the driver and walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Directory to transfer from.
    pub source_root: PathBuf,
    /// Directory to transfer into.
    pub destination_root: PathBuf,
    /// Copy or move.
    pub mode: TransferMode,
    /// Filter tokens; empty means every file qualifies.
    pub filters: Vec<String>,
    /// In move mode, copy then delete when rename fails across filesystems.
    pub cross_device_fallback: bool,
}

impl TransferRequest {
    /// Create a request with no filters and no cross-device fallback.
    #[must_use]
    pub fn new(
        source_root: impl Into<PathBuf>,
        destination_root: impl Into<PathBuf>,
        mode: TransferMode,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            destination_root: destination_root.into(),
            mode,
            filters: Vec::new(),
            cross_device_fallback: false,
        }
    }

    /// Set the filter tokens.
    #[must_use]
    pub fn with_filters<I, S>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filters = filters.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable the cross-device copy-then-delete fallback.
    #[must_use]
    pub fn with_cross_device_fallback(mut self, enabled: bool) -> Self {
        self.cross_device_fallback = enabled;
        self
    }

    /// Whether a filter subset was requested.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    /// Destination path for an entry's path relative to the source root.
    #[must_use]
    pub fn destination_for(&self, relative_path: &Path) -> PathBuf {
        self.destination_root.join(relative_path)
    }
}
