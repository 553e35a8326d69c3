// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Marker derivation for group names.
//!
//! A group named `n` is delimited in the token stream by the literal tokens
//! `n.start` and `n.end`. Markers are derived from declared names only;
//! free-form `.start`/`.end` tokens for undeclared names are ordinary tokens.

/// Suffix appended to a group name to form its opening marker.
pub const START_SUFFIX: &str = ".start";

/// Suffix appended to a group name to form its closing marker.
pub const END_SUFFIX: &str = ".end";

/// The opening marker for `name`.
pub fn start_marker(name: &str) -> String {
    format!("{}{}", name, START_SUFFIX)
}

/// The closing marker for `name`.
pub fn end_marker(name: &str) -> String {
    format!("{}{}", name, END_SUFFIX)
}

/// True if `token` is exactly the opening marker for `name`.
///
/// Prefix/suffix comparison; no per-token allocation.
#[inline]
pub fn is_start_marker(token: &str, name: &str) -> bool {
    token.strip_prefix(name) == Some(START_SUFFIX)
}

/// True if `token` is exactly the closing marker for `name`.
#[inline]
pub fn is_end_marker(token: &str, name: &str) -> bool {
    token.strip_prefix(name) == Some(END_SUFFIX)
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
