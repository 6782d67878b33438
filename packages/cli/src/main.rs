//! dirxfer CLI entry point.
//!
//! Copies or moves a directory tree, optionally keeping only files whose
//! path contains one of the given tokens.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;
mod settings;

use std::env;

use clap::Parser;

use args::{Args, normalize_legacy_flags};

fn main() {
    let args = Args::parse_from(normalize_legacy_flags(env::args_os()));

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load(args)?;
    let request = settings::build_request(args, &settings);

    log::debug!("Request: {request:?}");

    let outcome = dirxfer_transfer::run(&request, |_, error| {
        output::print_error(&error.to_string());
    })?;

    for warning in &outcome.warnings {
        output::print_warning(&format!("{}: {}", warning.path.display(), warning.message));
    }

    output::print_summary(&request, &outcome);
    Ok(())
}
