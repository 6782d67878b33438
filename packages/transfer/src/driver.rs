//! Top-level run orchestration.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use crate::error::TransferError;
use crate::materialize::ensure_directory;
use crate::outcome::TransferOutcome;
use crate::request::{TransferMode, TransferRequest};
use crate::walk::{remove_emptied_directory, walk};

/// Run one transfer.
///
/// Validates the source root, materializes the destination root, then walks
/// the tree once. Nothing is created when validation fails. In move mode the
/// source root itself is removed last if the walk emptied it.
///
/// # Arguments
///
/// * `request` - What to transfer and how
/// * `on_error` - Called for every per-entry failure as it happens
///
/// # Errors
///
/// * If the source root does not exist, is not a directory, or cannot be read
/// * If the destination root is the source root
/// * If any destination directory cannot be created
pub fn run<F>(request: &TransferRequest, mut on_error: F) -> Result<TransferOutcome, TransferError>
where
    F: FnMut(&Path, &TransferError),
{
    log::info!(
        "Starting {} of {} to {}",
        request.mode,
        request.source_root.display(),
        request.destination_root.display()
    );

    validate_source(&request.source_root)?;
    reject_self_destination(request)?;
    ensure_directory(&request.destination_root)?;

    let mut outcome = walk(request, &mut on_error)?;

    if request.mode == TransferMode::Move {
        remove_emptied_directory(&request.source_root, &mut outcome, &mut on_error);
    }

    log::info!(
        "Finished: {} visited, {} {}, {} skipped, {} failed",
        outcome.entries_visited,
        outcome.entries_transferred,
        request.mode.past_tense(),
        outcome.entries_skipped_by_filter,
        outcome.failures.len()
    );

    Ok(outcome)
}

/// Check that `source_root` is an existing, readable directory.
///
/// # Errors
///
/// * If it does not exist
/// * If it is not a directory
/// * If it cannot be listed
pub fn validate_source(source_root: &Path) -> Result<(), TransferError> {
    let metadata = match fs::metadata(source_root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(TransferError::SourceNotFound {
                path: source_root.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(TransferError::ReadDirError {
                path: source_root.to_path_buf(),
                io_error: e,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(TransferError::SourceNotDirectory {
            path: source_root.to_path_buf(),
        });
    }

    fs::read_dir(source_root).map_err(|e| TransferError::ReadDirError {
        path: source_root.to_path_buf(),
        io_error: e,
    })?;

    Ok(())
}

/// Fail when the destination root resolves to the source root.
///
/// A destination that does not exist yet cannot be the source.
fn reject_self_destination(request: &TransferRequest) -> Result<(), TransferError> {
    let Ok(destination) = fs::canonicalize(&request.destination_root) else {
        return Ok(());
    };
    let source = fs::canonicalize(&request.source_root).map_err(|e| {
        TransferError::ReadDirError {
            path: request.source_root.clone(),
            io_error: e,
        }
    })?;

    if destination == source {
        return Err(TransferError::DestinationIsSource {
            path: request.destination_root.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn build_scenario(root: &Path) {
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.txt"), "alpha").unwrap();
        fs::write(root.join("sub/b.log"), "bravo").unwrap();
    }

    /// Relative paths of every node below `root`, directories marked with `/`.
    fn snapshot(root: &Path) -> Vec<(String, Option<Vec<u8>>)> {
        let mut nodes = Vec::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                let rel = path.strip_prefix(root).unwrap().to_string_lossy().to_string();
                if path.is_dir() {
                    nodes.push((format!("{rel}/"), None));
                    pending.push(path);
                } else {
                    nodes.push((rel, Some(fs::read(&path).unwrap())));
                }
            }
        }
        nodes.sort();
        nodes
    }

    #[test]
    fn test_filtered_copy_scenario() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("src");
        let dest = base.path().join("dest");
        build_scenario(&src);

        let request = TransferRequest::new(&src, &dest, TransferMode::Copy).with_filters([".txt"]);
        let outcome = run(&request, |_, _| {}).unwrap();

        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
        assert!(dest.join("sub").is_dir());
        assert!(!dest.join("sub/b.log").exists());
        assert_eq!(outcome.entries_transferred, 1);
        assert_eq!(outcome.entries_skipped_by_filter, 1);
    }

    #[test]
    fn test_unfiltered_copy_is_isomorphic() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("src");
        let dest = base.path().join("dest");
        build_scenario(&src);
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("sub/bin.dat"), [0_u8, 13, 10, 255, 0]).unwrap();

        let request = TransferRequest::new(&src, &dest, TransferMode::Copy);
        let outcome = run(&request, |_, _| {}).unwrap();

        assert!(outcome.is_clean());
        assert!(dest.join("empty").is_dir());
        assert_eq!(snapshot(&src), snapshot(&dest));
    }

    #[test]
    fn test_copy_twice_matches_copy_once() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("src");
        let dest = base.path().join("dest");
        build_scenario(&src);

        let request = TransferRequest::new(&src, &dest, TransferMode::Copy);
        run(&request, |_, _| {}).unwrap();
        let once = snapshot(&dest);
        run(&request, |_, _| {}).unwrap();

        assert_eq!(snapshot(&dest), once);
    }

    #[test]
    fn test_copy_merges_into_populated_destination() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("src");
        let dest = base.path().join("dest");
        build_scenario(&src);
        fs::create_dir_all(dest.join("sub")).unwrap();
        fs::write(dest.join("a.txt"), "old alpha").unwrap();
        fs::write(dest.join("unrelated.md"), "kept").unwrap();

        let request = TransferRequest::new(&src, &dest, TransferMode::Copy);
        let outcome = run(&request, |_, _| {}).unwrap();

        assert!(outcome.is_clean());
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
        assert_eq!(fs::read_to_string(dest.join("unrelated.md")).unwrap(), "kept");
        assert_eq!(fs::read_to_string(dest.join("sub/b.log")).unwrap(), "bravo");
    }

    #[test]
    fn test_move_relocates_and_removes_source() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("src");
        let dest = base.path().join("dest");
        build_scenario(&src);

        let request = TransferRequest::new(&src, &dest, TransferMode::Move);
        let outcome = run(&request, |_, _| {}).unwrap();

        assert!(outcome.is_clean());
        assert_eq!(outcome.entries_transferred, 2);
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "alpha");
        assert_eq!(fs::read_to_string(dest.join("sub/b.log")).unwrap(), "bravo");
    }

    #[test]
    fn test_missing_source_creates_nothing() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("missing");
        let dest = base.path().join("dest");

        let request = TransferRequest::new(&src, &dest, TransferMode::Copy);
        let err = run(&request, |_, _| {}).unwrap_err();

        assert!(matches!(err, TransferError::SourceNotFound { .. }));
        assert!(err.to_string().contains("does not exist"));
        assert!(!dest.exists());
    }

    #[test]
    fn test_source_file_is_rejected() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("file.txt");
        let dest = base.path().join("dest");
        fs::write(&src, "not a dir").unwrap();

        let err = validate_source(&src).unwrap_err();

        assert!(matches!(err, TransferError::SourceNotDirectory { path } if path == src));
        assert!(!dest.exists());
    }

    #[test]
    fn test_destination_equal_to_source_is_rejected() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("src");
        build_scenario(&src);

        let request = TransferRequest::new(&src, &src, TransferMode::Copy);
        let err = run(&request, |_, _| {}).unwrap_err();

        assert!(matches!(err, TransferError::DestinationIsSource { .. }));
        assert!(err.is_fatal());
        assert_eq!(fs::read_to_string(src.join("a.txt")).unwrap(), "alpha");
    }

    #[test]
    fn test_destination_alias_of_source_is_rejected() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("src");
        build_scenario(&src);
        let alias = src.join("sub/..");

        let request = TransferRequest::new(&src, &alias, TransferMode::Move);
        let err = run(&request, |_, _| {}).unwrap_err();

        assert!(matches!(err, TransferError::DestinationIsSource { .. }));
        assert_eq!(fs::read_to_string(src.join("sub/b.log")).unwrap(), "bravo");
    }

    #[test]
    fn test_destination_parent_missing_is_fatal() {
        let base = TempDir::new().unwrap();
        let src = base.path().join("src");
        build_scenario(&src);
        let dest: PathBuf = base.path().join("no/such/dest");

        let request = TransferRequest::new(&src, &dest, TransferMode::Copy);
        let err = run(&request, |_, _| {}).unwrap_err();

        assert!(matches!(err, TransferError::CreateDirError { .. }));
        assert!(err.is_fatal());
    }
}
