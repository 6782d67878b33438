//! Error types for transfer operations.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// Errors that can occur during transfer operations.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Source root does not exist.
    #[error("Source directory {} does not exist", path.display())]
    SourceNotFound {
        /// The source root path.
        path: PathBuf,
    },

    /// Source root exists but is not a directory.
    #[error("Source {} is not a directory", path.display())]
    SourceNotDirectory {
        /// The source root path.
        path: PathBuf,
    },

    /// Destination root resolves to the source root.
    #[error("Destination {} is the source directory", path.display())]
    DestinationIsSource {
        /// The destination root path.
        path: PathBuf,
    },

    /// Failed to read a directory.
    #[error("Failed to read directory {}: {io_error}", path.display())]
    ReadDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to create target directory.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to open a source file for reading.
    #[error("Failed to open {} for reading: {io_error}", path.display())]
    OpenSourceError {
        /// The source file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to open a target file for writing.
    #[error("Failed to open {} for writing: {io_error}", path.display())]
    OpenTargetError {
        /// The target file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed while reading file contents.
    #[error("Failed to read {}: {io_error}", path.display())]
    ReadError {
        /// The source file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed while writing file contents, including short writes.
    #[error("Failed to write {}: {io_error}", path.display())]
    WriteError {
        /// The target file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Source and target are the same file on disk.
    #[error("{} and {} are the same file", source_path.display(), target_path.display())]
    SameFile {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
    },

    /// Failed to rename a file into place.
    #[error("Failed to move {} to {}: {io_error}", source_path.display(), target_path.display())]
    RenameError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to remove a source file or directory after moving it.
    #[error("Failed to remove {}: {io_error}", path.display())]
    RemoveError {
        /// The path being removed.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Directory enumeration reported an error for an entry.
    #[error("Failed to enumerate {}: {message}", path.display())]
    EnumerationError {
        /// The path being enumerated.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}

impl TransferError {
    /// Whether this error aborts the whole run.
    ///
    /// Source validation failures and directory creation failures are fatal.
    /// Everything else is scoped to a single entry and the walk continues.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::SourceNotFound { .. }
                | Self::SourceNotDirectory { .. }
                | Self::DestinationIsSource { .. }
                | Self::ReadDirError { .. }
                | Self::CreateDirError { .. }
        )
    }

    /// The path this error is about.
    ///
    /// For rename and same-file failures this is the source path.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceNotFound { path }
            | Self::SourceNotDirectory { path }
            | Self::DestinationIsSource { path }
            | Self::ReadDirError { path, .. }
            | Self::CreateDirError { path, .. }
            | Self::OpenSourceError { path, .. }
            | Self::OpenTargetError { path, .. }
            | Self::ReadError { path, .. }
            | Self::WriteError { path, .. }
            | Self::RemoveError { path, .. }
            | Self::EnumerationError { path, .. } => path,
            Self::SameFile { source_path, .. } | Self::RenameError { source_path, .. } => {
                source_path
            }
        }
    }
}
