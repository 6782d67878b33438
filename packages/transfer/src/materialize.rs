//! Destination directory creation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::Path;

use crate::error::TransferError;

/// Permission bits for created directories (`rwxr-xr-x`, before umask).
pub const DIRECTORY_MODE: u32 = 0o755;

/// Ensure `path` exists as a directory.
///
/// Creates exactly one level; the parent must already exist. An existing
/// directory is success.
///
/// # Returns
///
/// `true` if the directory was created, `false` if it already existed.
///
/// # Errors
///
/// * If creation fails for any reason other than the directory already existing
/// * If something other than a directory already occupies `path`
pub fn ensure_directory(path: &Path) -> Result<bool, TransferError> {
    let mut builder = fs::DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }

    match builder.create(path) {
        Ok(()) => {
            log::debug!("Created directory {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if path.is_dir() {
                log::trace!("Directory already exists: {}", path.display());
                Ok(false)
            } else {
                Err(TransferError::CreateDirError {
                    path: path.to_path_buf(),
                    io_error: io::Error::new(
                        io::ErrorKind::NotADirectory,
                        "path exists and is not a directory",
                    ),
                })
            }
        }
        Err(e) => Err(TransferError::CreateDirError {
            path: path.to_path_buf(),
            io_error: e,
        }),
    }
}
