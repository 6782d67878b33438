//! Filtered directory tree copy and move engine.
//!
//! This crate copies or moves a directory tree from a source root to a
//! destination root:
//!
//! * Pre-order traversal that never follows symlinks, using `jwalk`
//! * Substring filter tokens deciding which files are transferred
//! * Destination directories mirrored ahead of the files inside them
//! * Buffered byte-for-byte copies, with copy-on-write via `reflink-copy`
//! * Rename-based moves, with an opt-in cross-device fallback
//! * Per-entry failures collected without stopping the walk
//!
//! # Example
//!
//! ```rust,ignore
//! use dirxfer_transfer::{TransferMode, TransferRequest, run};
//!
//! let request = TransferRequest::new("src", "dest", TransferMode::Copy)
//!     .with_filters([".txt"]);
//!
//! let outcome = run(&request, |path, error| {
//!     eprintln!("{}: {error}", path.display());
//! })?;
//! println!("{} files copied", outcome.entries_transferred);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod driver;
mod error;
mod executor;
mod matcher;
mod materialize;
mod outcome;
mod request;
mod walk;

pub use driver::{run, validate_source};
pub use error::TransferError;
pub use executor::{FALLBACK_BUFFER_SIZE, copy_file, move_file, transfer};
pub use matcher::matches;
pub use materialize::{DIRECTORY_MODE, ensure_directory};
pub use outcome::{EntryFailure, EntryWarning, TransferOutcome};
pub use request::{TransferMode, TransferRequest};
pub use walk::{EntryKind, TreeEntry, tree_entries, walk, walk_entries};
