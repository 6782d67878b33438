//! Single file copy and move.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::TransferError;
use crate::materialize::ensure_directory;
use crate::request::TransferMode;

/// Buffer size used when the platform reports no preferred block size.
pub const FALLBACK_BUFFER_SIZE: usize = 8 * 1024;

/// Transfer a single regular file, overwriting the target if it exists.
///
/// # Arguments
///
/// * `source` - Source file path
/// * `target` - Target file path
/// * `mode` - Copy or move
/// * `cross_device_fallback` - In move mode, copy then delete the source when
///   the rename fails because the paths are on different filesystems
///
/// # Errors
///
/// * If the target's parent directory cannot be created (copy mode, fatal)
/// * If either file cannot be opened, read or written
/// * If the rename fails and no fallback applies
pub fn transfer(
    source: &Path,
    target: &Path,
    mode: TransferMode,
    cross_device_fallback: bool,
) -> Result<(), TransferError> {
    match mode {
        TransferMode::Copy => copy_file(source, target).map(|_| ()),
        TransferMode::Move => move_file(source, target, cross_device_fallback),
    }
}

/// Copy a single file byte for byte.
///
/// Makes sure the target's immediate parent exists, then tries a
/// copy-on-write clone when the target is new and falls back to a buffered
/// stream.
///
/// # Returns
///
/// The number of bytes streamed, or `None` when the file was cloned.
///
/// # Errors
///
/// * If the parent directory cannot be created
/// * If source and target are the same file
/// * If either file cannot be opened, read or written
pub fn copy_file(source: &Path, target: &Path) -> Result<Option<u64>, TransferError> {
    log::debug!("Copying file: {} -> {}", source.display(), target.display());

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    // Truncating the target would wipe the source before it is read.
    if is_same_file(source, target) {
        return Err(TransferError::SameFile {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
        });
    }

    if !target.exists() {
        match reflink_copy::reflink(source, target) {
            Ok(()) => {
                log::trace!("Reflinked {} -> {}", source.display(), target.display());
                return Ok(None);
            }
            Err(e) => log::trace!("Reflink unavailable for {}: {e}", source.display()),
        }
    }

    stream_copy(source, target).map(Some)
}

/// Move a single file with a rename.
///
/// # Errors
///
/// * If the rename fails and `cross_device_fallback` does not apply
/// * If the fallback copy fails, or the source cannot be removed afterwards
pub fn move_file(
    source: &Path,
    target: &Path,
    cross_device_fallback: bool,
) -> Result<(), TransferError> {
    log::debug!("Moving file: {} -> {}", source.display(), target.display());

    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(e) if cross_device_fallback && e.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "Rename crosses filesystems, copying instead: {}",
                source.display()
            );
            copy_file(source, target)?;
            fs::remove_file(source).map_err(|e| TransferError::RemoveError {
                path: source.to_path_buf(),
                io_error: e,
            })
        }
        Err(e) => Err(TransferError::RenameError {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
            io_error: e,
        }),
    }
}

/// Stream `source` into `target` through a block-sized buffer.
///
/// The target is created or truncated. Both handles are dropped on every
/// return path.
fn stream_copy(source: &Path, target: &Path) -> Result<u64, TransferError> {
    let mut reader = File::open(source).map_err(|e| TransferError::OpenSourceError {
        path: source.to_path_buf(),
        io_error: e,
    })?;

    let buffer_size = reader
        .metadata()
        .map_or(FALLBACK_BUFFER_SIZE, |meta| preferred_block_size(&meta));

    let mut writer = File::create(target).map_err(|e| TransferError::OpenTargetError {
        path: target.to_path_buf(),
        io_error: e,
    })?;

    let mut buffer = vec![0_u8; buffer_size];
    let mut total: u64 = 0;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(TransferError::ReadError {
                    path: source.to_path_buf(),
                    io_error: e,
                });
            }
        };

        // `write_all` reports a short write as `WriteZero`.
        writer
            .write_all(&buffer[..read])
            .map_err(|e| TransferError::WriteError {
                path: target.to_path_buf(),
                io_error: e,
            })?;

        total += read as u64;
    }

    log::trace!(
        "Copied {total} bytes {} -> {} ({buffer_size} byte buffer)",
        source.display(),
        target.display()
    );

    Ok(total)
}

#[cfg(unix)]
fn is_same_file(source: &Path, target: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(source), fs::metadata(target)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(source: &Path, target: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(target)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(unix)]
fn preferred_block_size(meta: &fs::Metadata) -> usize {
    use std::os::unix::fs::MetadataExt;

    usize::try_from(meta.blksize())
        .ok()
        .filter(|&size| size > 0)
        .unwrap_or(FALLBACK_BUFFER_SIZE)
}

#[cfg(not(unix))]
const fn preferred_block_size(_meta: &fs::Metadata) -> usize {
    FALLBACK_BUFFER_SIZE
}
