//! Filter token matching.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Decide whether `name` qualifies for transfer.
///
/// An empty filter list accepts everything. Otherwise `name` qualifies when
/// any token occurs anywhere inside it. This is substring containment, not a
/// suffix check: `".txt"` matches `notes.txt.bak`, and when `name` is a full
/// path a token can match a directory component.
#[must_use]
pub fn matches<S: AsRef<str>>(name: &str, filters: &[S]) -> bool {
    filters.is_empty() || filters.iter().any(|token| name.contains(token.as_ref()))
}
