// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Usage-error and failure specs: exit codes and stderr diagnostics.

use crate::prelude::*;

const USAGE_LINE: &str = "usage: argsplit <label> [<name>...] -- [<token>...]\n";

#[test]
fn no_arguments_reports_missing_separator() {
    argsplit(&[])
        .assert()
        .failure()
        .code(2)
        .stdout("")
        .stderr(format!("error: no arguments separator given\n{}", USAGE_LINE));
}

#[test]
fn names_without_separator_fail() {
    argsplit(&["std_array", "a"])
        .assert()
        .failure()
        .code(2)
        .stderr(format!("error: no arguments separator given\n{}", USAGE_LINE));
}

#[test]
fn leading_separator_reports_no_names() {
    argsplit(&["--", "1", "2"])
        .assert()
        .failure()
        .code(2)
        .stderr(format!("error: no names given\n{}", USAGE_LINE));
}

#[test]
fn unterminated_group_fails_with_closer_and_index() {
    argsplit(&["std_array", "a", "b", "--", "a.start", "a.end", "b.start"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr("error: expected 'b.end' after argument 2\n");
}

#[test]
fn unterminated_group_produces_no_partial_output() {
    argsplit(&["std_array", "a", "--", "1", "2", "a.start", "x"])
        .assert()
        .failure()
        .code(1)
        .stdout("");
}
