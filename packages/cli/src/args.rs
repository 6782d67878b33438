//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use dirxfer_transfer::TransferMode;

/// CLI arguments for dirxfer.
#[derive(Debug, Parser)]
#[command(
    name = "dirxfer",
    about = "Copy or move a directory tree, optionally filtered by filename tokens",
    version,
    override_usage = "dirxfer <SOURCE> <DESTINATION> [-cp | -mv] [FILTER]..."
)]
#[command(group(ArgGroup::new("mode").args(["copy", "move_files"])))]
pub struct Args {
    /// Directory to transfer from.
    #[arg(index = 1)]
    pub source: PathBuf,

    /// Directory to transfer into.
    #[arg(index = 2)]
    pub destination: PathBuf,

    /// Copy files, leaving the source intact (also `-cp`).
    #[arg(long = "cp")]
    pub copy: bool,

    /// Move files, removing them from the source (also `-mv`).
    #[arg(long = "mv")]
    pub move_files: bool,

    /// Only transfer files whose path contains one of these tokens.
    #[arg(index = 3, requires = "mode")]
    pub filters: Vec<String>,

    /// Settings file to load instead of the per-user one.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// When a move crosses filesystems, copy and then delete the source.
    #[arg(long)]
    pub cross_device_fallback: bool,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Mode requested on the command line, if any.
    #[must_use]
    pub const fn mode_override(&self) -> Option<TransferMode> {
        if self.move_files {
            Some(TransferMode::Move)
        } else if self.copy {
            Some(TransferMode::Copy)
        } else {
            None
        }
    }
}

/// Rewrite the single-dash `-cp` and `-mv` spellings to their long forms.
///
/// clap would otherwise read `-cp` as the short flags `-c` and `-p`.
#[must_use]
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-cp") => OsString::from("--cp"),
            Some("-mv") => OsString::from("--mv"),
            _ => arg,
        })
        .collect()
}
