// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token partitioner: splits a flat token sequence into named groups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::PartitionError;
use crate::marker::{end_marker, is_start_marker};

/// Result of partitioning a token sequence.
///
/// `groups` holds one entry per declared name, in declaration order, even
/// when no span for that name appeared in the input. `residual` holds the
/// tokens outside any recognized span, in input order. Markers are consumed
/// during scanning and appear in neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionResult {
    /// Captured tokens per declared group.
    pub groups: IndexMap<String, Vec<String>>,
    /// Tokens not enclosed by any recognized span.
    pub residual: Vec<String>,
}

/// Single-pass partitioner over a borrowed token sequence.
///
/// An index cursor stands in for queue consumption: `pos` is both the next
/// unread position and the count of tokens consumed so far, which is what
/// unterminated-group errors report.
pub struct Partitioner<'a> {
    /// Declared group names, in declaration order.
    names: &'a [String],
    /// The input being scanned.
    tokens: &'a [String],
    /// Index of the next unconsumed token.
    pos: usize,
}

impl<'a> Partitioner<'a> {
    /// Partition `tokens` into the groups declared by `names`.
    ///
    /// Tokens between `<n>.start` and `<n>.end` are captured for group `n`;
    /// everything else falls to the residual sequence. Multiple spans for
    /// one name concatenate in encounter order. A span left open at end of
    /// input fails the whole operation.
    pub fn partition(
        names: &'a [String],
        tokens: &'a [String],
    ) -> Result<PartitionResult, PartitionError> {
        let _span =
            tracing::debug_span!("partition", names = names.len(), tokens = tokens.len()).entered();

        let mut partitioner = Partitioner { names, tokens, pos: 0 };
        let mut groups: IndexMap<String, Vec<String>> =
            names.iter().map(|n| (n.clone(), Vec::new())).collect();
        let mut residual = Vec::new();

        while let Some(arg) = partitioner.next_token() {
            // The token just consumed sits at pos - 1.
            let opened_at = partitioner.pos - 1;
            match partitioner.match_start(arg) {
                Some(name) => {
                    let captured = partitioner.capture_span(name, opened_at)?;
                    groups.entry(name.clone()).or_default().extend(captured);
                }
                None => residual.push(arg.clone()),
            }
        }

        Ok(PartitionResult { groups, residual })
    }

    /// Consume and return the next token, if any.
    #[inline]
    fn next_token(&mut self) -> Option<&'a String> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Match `token` against the start markers of the declared names.
    ///
    /// Names are checked in declaration order; the first match wins.
    fn match_start(&self, token: &str) -> Option<&'a String> {
        self.names.iter().find(|name| is_start_marker(token, name))
    }

    /// Capture tokens until the closing marker for `name`.
    ///
    /// The closing marker is consumed but not captured. `opened_at` is the
    /// position of the opening marker, reported when the input runs out
    /// before the span closes.
    fn capture_span(
        &mut self,
        name: &str,
        opened_at: usize,
    ) -> Result<Vec<String>, PartitionError> {
        let closer = end_marker(name);
        let mut captured = Vec::new();

        while let Some(arg) = self.next_token() {
            if *arg == closer {
                tracing::trace!(group = name, count = captured.len(), "span closed");
                return Ok(captured);
            }
            captured.push(arg.clone());
        }

        Err(PartitionError::UnterminatedGroup { expected: closer, opened_at })
    }
}

#[cfg(test)]
#[path = "partition_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "partition_properties.rs"]
mod properties;
