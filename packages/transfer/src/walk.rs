//! Tree traversal and per-entry dispatch.
//!
//! Traversal and dispatch are separate: [`tree_entries`] lazily produces
//! [`TreeEntry`] values from the filesystem, and [`walk_entries`] decides what
//! to do with each one. Any iterator of entries can be fed to the dispatcher.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::TransferError;
use crate::executor;
use crate::materialize::ensure_directory;
use crate::matcher::matches;
use crate::outcome::TransferOutcome;
use crate::request::{TransferMode, TransferRequest};

/// What kind of filesystem node an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory (never a symlink to one).
    Directory,
    /// A regular file.
    RegularFile,
    /// Symlinks, sockets, FIFOs, devices.
    Other,
}

/// A node visited during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Path as seen under the source root.
    pub path: PathBuf,
    /// `path` with the source root stripped.
    pub relative_path: PathBuf,
    /// Node kind, without following symlinks.
    pub kind: EntryKind,
    /// Depth below the source root (children of the root are 1).
    pub depth: usize,
}

/// Lazily enumerate everything below `root` in pre-order.
///
/// Symlinks are reported as [`EntryKind::Other`] and never followed. Siblings
/// are sorted by name. The root itself is not yielded. A directory whose
/// contents cannot be listed is yielded, followed by an
/// [`TransferError::EnumerationError`] naming it. Enumeration runs on the
/// calling thread.
pub fn tree_entries(root: &Path) -> impl Iterator<Item = Result<TreeEntry, TransferError>> {
    let root = root.to_path_buf();

    jwalk::WalkDir::new(&root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial)
        .into_iter()
        .flat_map(move |entry| {
            let mut items = Vec::with_capacity(1);

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    items.push(Err(enumeration_error(&root, &e)));
                    return items;
                }
            };

            let path = entry.path();
            let unreadable = entry
                .read_children_error
                .as_ref()
                .map(|e| enumeration_error(&path, e));

            // Skip the root directory itself
            if path == root {
                items.extend(unreadable.map(Err));
                return items;
            }

            let relative_path = match path.strip_prefix(&root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => {
                    items.push(Err(TransferError::EnumerationError {
                        path,
                        message: "Failed to strip prefix".to_string(),
                    }));
                    return items;
                }
            };

            let file_type = entry.file_type();
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::RegularFile
            } else {
                EntryKind::Other
            };

            items.push(Ok(TreeEntry {
                path,
                relative_path,
                kind,
                depth: entry.depth,
            }));
            items.extend(unreadable.map(Err));
            items
        })
}

/// Attribute a jwalk error to the path it names, or to `fallback`.
fn enumeration_error(fallback: &Path, error: &jwalk::Error) -> TransferError {
    TransferError::EnumerationError {
        path: error
            .path()
            .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf),
        message: error.to_string(),
    }
}

/// Dispatch each entry to the materializer, matcher and executor.
///
/// Entries must arrive in pre-order. Per-entry failures are passed to
/// `on_error`, recorded in the outcome, and the walk continues. In move mode
/// the visited source directories are removed deepest first once every entry
/// has been handled.
///
/// # Arguments
///
/// * `request` - The run's configuration
/// * `entries` - Entries below the source root, in pre-order
/// * `on_error` - Called for every per-entry failure as it happens
///
/// # Errors
///
/// * If a destination directory cannot be created; the walk stops immediately
pub fn walk_entries<I, F>(
    request: &TransferRequest,
    entries: I,
    mut on_error: F,
) -> Result<TransferOutcome, TransferError>
where
    I: IntoIterator<Item = Result<TreeEntry, TransferError>>,
    F: FnMut(&Path, &TransferError),
{
    let mut outcome = TransferOutcome::new();
    let mut visited_dirs: Vec<PathBuf> = Vec::new();

    for item in entries {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                outcome.record_warning(e.path(), e.to_string());
                continue;
            }
        };

        outcome.entries_visited += 1;
        let target = request.destination_for(&entry.relative_path);

        match entry.kind {
            EntryKind::Directory => {
                if ensure_directory(&target)? {
                    outcome.directories_materialized += 1;
                }
                if request.mode == TransferMode::Move {
                    visited_dirs.push(entry.path);
                }
            }
            EntryKind::RegularFile => {
                // The source root is not part of the matched name.
                let name = entry.relative_path.to_string_lossy();
                if !matches(&name, &request.filters) {
                    log::debug!("Skipping {name}: no filter token matches");
                    outcome.entries_skipped_by_filter += 1;
                    continue;
                }

                match executor::transfer(
                    &entry.path,
                    &target,
                    request.mode,
                    request.cross_device_fallback,
                ) {
                    Ok(()) => outcome.entries_transferred += 1,
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => {
                        on_error(&entry.path, &e);
                        outcome.record_failure(entry.path, e);
                    }
                }
            }
            EntryKind::Other => {
                outcome.record_warning(entry.path, "not a regular file or directory, skipped");
            }
        }
    }

    for dir in visited_dirs.iter().rev() {
        remove_emptied_directory(dir, &mut outcome, &mut on_error);
    }

    Ok(outcome)
}

/// Walk the source root of `request` from the filesystem.
///
/// # Errors
///
/// * If a destination directory cannot be created
pub fn walk<F>(request: &TransferRequest, on_error: F) -> Result<TransferOutcome, TransferError>
where
    F: FnMut(&Path, &TransferError),
{
    walk_entries(request, tree_entries(&request.source_root), on_error)
}

/// Remove a source directory whose contents were moved out.
///
/// A directory that still holds entries (files the filters excluded, or
/// files that failed to move) stays and is noted as a warning.
pub fn remove_emptied_directory<F>(
    dir: &Path,
    outcome: &mut TransferOutcome,
    on_error: &mut F,
) where
    F: FnMut(&Path, &TransferError),
{
    match fs::remove_dir(dir) {
        Ok(()) => {
            log::debug!("Removed source directory {}", dir.display());
            outcome.directories_removed += 1;
        }
        Err(e) if e.kind() == io::ErrorKind::DirectoryNotEmpty => {
            outcome.record_warning(dir, "directory not empty after move, left in place");
        }
        Err(e) => {
            let error = TransferError::RemoveError {
                path: dir.to_path_buf(),
                io_error: e,
            };
            on_error(dir, &error);
            outcome.record_failure(dir, error);
        }
    }
}
