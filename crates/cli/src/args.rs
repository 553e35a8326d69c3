// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Argument-vector interpretation for the argsplit binary.
//!
//! The vector is one or more declaration names, a literal `--` separator,
//! then the tokens to partition. The grammar is raw argv: names may look
//! like flags and tokens may contain further `--` elements, so this is a
//! plain scan rather than an option parser.

use thiserror::Error;

/// Literal token separating declaration names from the tokens to partition.
pub const SEPARATOR: &str = "--";

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Variable name for ungrouped tokens.
    pub residual_label: String,
    /// Declared group names, in declaration order.
    pub names: Vec<String>,
    /// The tokens to partition.
    pub tokens: Vec<String>,
}

/// Malformed argument vectors, detected before any partitioning.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// The argument vector contains no `--` token.
    #[error("no arguments separator given")]
    MissingSeparator,

    /// A `--` is present but no declaration names precede it.
    #[error("no names given")]
    NoNamesGiven,
}

/// Split the argument vector at the first `--`.
///
/// Everything before the separator is declaration names (the first being
/// the residual label); everything after is handed to the partitioner
/// untouched, including any further `--` elements.
pub fn parse_argv(argv: Vec<String>) -> Result<Invocation, UsageError> {
    let sep = argv
        .iter()
        .position(|arg| arg == SEPARATOR)
        .ok_or(UsageError::MissingSeparator)?;
    if sep == 0 {
        return Err(UsageError::NoNamesGiven);
    }

    let mut names = argv;
    let tokens = names.split_off(sep + 1);
    names.truncate(sep); // drop the separator itself
    let residual_label = names.remove(0);

    Ok(Invocation { residual_label, names, tokens })
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
