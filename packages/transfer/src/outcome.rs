//! Accumulated result of a transfer run.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use crate::error::TransferError;

/// A per-entry failure that did not stop the walk.
#[derive(Debug)]
pub struct EntryFailure {
    /// Source path of the entry.
    pub path: PathBuf,
    /// What went wrong.
    pub error: TransferError,
}

/// A walk-level note about an entry that was not transferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWarning {
    /// Source path of the entry.
    pub path: PathBuf,
    /// Human-readable reason.
    pub message: String,
}

/// Totals and failures for one run.
#[derive(Debug, Default)]
pub struct TransferOutcome {
    /// Entries dispatched by the walker (the source root is not counted).
    pub entries_visited: u64,
    /// Files copied or moved.
    pub entries_transferred: u64,
    /// Files that did not match any filter token.
    pub entries_skipped_by_filter: u64,
    /// Destination directories newly created.
    pub directories_materialized: u64,
    /// Source directories removed after a move.
    pub directories_removed: u64,
    /// Per-entry failures, in the order they happened.
    pub failures: Vec<EntryFailure>,
    /// Entries that were ignored, in the order they were seen.
    pub warnings: Vec<EntryWarning>,
}

impl TransferOutcome {
    /// Create an empty outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure and keep going.
    pub fn record_failure(&mut self, path: impl Into<PathBuf>, error: TransferError) {
        let path = path.into();
        log::debug!("Entry failed: {}: {error}", path.display());
        self.failures.push(EntryFailure { path, error });
    }

    /// Record a warning for an entry that was not transferred.
    pub fn record_warning(&mut self, path: impl Into<PathBuf>, message: impl Into<String>) {
        let path = path.into();
        let message = message.into();
        log::warn!("{}: {message}", path.display());
        self.warnings.push(EntryWarning { path, message });
    }

    /// Whether every entry was handled without failure.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_record_failure_keeps_order() {
        let mut outcome = TransferOutcome::new();
        assert!(outcome.is_clean());

        for name in ["a", "b"] {
            outcome.record_failure(
                name,
                TransferError::ReadError {
                    path: PathBuf::from(name),
                    io_error: io::Error::from(io::ErrorKind::Other),
                },
            );
        }

        assert!(!outcome.is_clean());
        let paths: Vec<_> = outcome.failures.iter().map(|f| f.path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn test_record_warning() {
        let mut outcome = TransferOutcome::new();
        outcome.record_warning("/src/link", "symbolic link not followed");

        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].message, "symbolic link not followed");
        assert!(outcome.is_clean());
    }
}
