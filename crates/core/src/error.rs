// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for token partitioning.

use thiserror::Error;

/// Errors that can occur while partitioning a token sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// A start marker was recognized but its closing marker never arrived
    /// before the input ran out. The whole partition fails; no partial
    /// result is returned.
    #[error("expected '{expected}' after argument {opened_at}")]
    UnterminatedGroup {
        /// The closing marker that was expected (e.g. `b.end`).
        expected: String,
        /// Number of tokens fully consumed before the opening marker.
        opened_at: usize,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
