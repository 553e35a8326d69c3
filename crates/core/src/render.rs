// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of partition results as shell array-append statements.

use crate::error::PartitionError;
use crate::partition::Partitioner;
use crate::quote::quote;

/// Partition `tokens` and render one `name+=( ... )` line per non-empty
/// output sequence.
///
/// The residual line, when present, always comes first under
/// `residual_label`; group lines follow sorted lexicographically by name
/// (not declaration order). Empty sequences produce no line, so the result
/// may be empty. Partition failures propagate unchanged.
pub fn render(
    residual_label: &str,
    names: &[String],
    tokens: &[String],
) -> Result<Vec<String>, PartitionError> {
    let result = Partitioner::partition(names, tokens)?;
    let mut lines = Vec::new();

    if !result.residual.is_empty() {
        lines.push(assignment(residual_label, &result.residual));
    }

    let mut groups: Vec<_> = result.groups.iter().collect();
    groups.sort_by(|(a, _), (b, _)| a.cmp(b));
    for (name, captured) in groups {
        if !captured.is_empty() {
            lines.push(assignment(name, captured));
        }
    }

    Ok(lines)
}

/// A single `name+=( token... )` statement with shell-quoted tokens.
fn assignment(name: &str, tokens: &[String]) -> String {
    let words: Vec<String> = tokens.iter().map(|t| quote(t)).collect();
    format!("{}+=( {} )", name, words.join(" "))
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
