//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use colored::Colorize;
use dirxfer_transfer::{TransferOutcome, TransferRequest};

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow().bold(), message);
}

/// Print the one-line completion summary.
pub fn print_summary(request: &TransferRequest, outcome: &TransferOutcome) {
    let line = summary_line(request, outcome);
    if outcome.is_clean() {
        println!("{}", line.green());
    } else {
        println!("{}", line.yellow());
    }
}

/// Build the completion summary.
///
/// The wording depends on the mode and on whether filters were applied.
#[must_use]
pub fn summary_line(request: &TransferRequest, outcome: &TransferOutcome) -> String {
    let verb = capitalize(request.mode.past_tense());

    let subject = if request.is_filtered() {
        let tokens: Vec<String> = request.filters.iter().map(|f| format!("'{f}'")).collect();
        format!("files matching {}", tokens.join(", "))
    } else {
        "all files".to_string()
    };

    let mut counts = format!("{} transferred", outcome.entries_transferred);
    if request.is_filtered() {
        counts.push_str(&format!(", {} skipped", outcome.entries_skipped_by_filter));
    }
    if !outcome.failures.is_empty() {
        counts.push_str(&format!(", {} failed", outcome.failures.len()));
    }

    format!(
        "{verb} {subject} from {} to {} ({counts}).",
        request.source_root.display(),
        request.destination_root.display()
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
