// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end rendering specs.

use crate::prelude::*;

#[test]
fn renders_residual_then_group_lines() {
    argsplit(&["std_array", "a", "b", "--", "1", "2", "a.start", "a1", "a 2", "a.end"])
        .assert()
        .success()
        .stdout("std_array+=( 1 2 )\na+=( a1 'a 2' )\n");
}

#[test]
fn residual_only_invocation() {
    argsplit(&["std_array", "--", "1", "2"])
        .assert()
        .success()
        .stdout("std_array+=( 1 2 )\n");
}

#[test]
fn fully_consumed_markers_print_nothing() {
    argsplit(&["std_array", "a", "b", "--", "a.start", "a.end", "b.start", "b.end"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn no_tokens_prints_nothing() {
    argsplit(&["std_array", "a", "--"]).assert().success().stdout("");
}

#[test]
fn groups_print_in_lexicographic_order() {
    argsplit(&["std_array", "b", "a", "--", "b.start", "b1", "b.end", "a.start", "a1", "a.end"])
        .assert()
        .success()
        .stdout("a+=( a1 )\nb+=( b1 )\n");
}

#[test]
fn undeclared_markers_stay_in_residual() {
    argsplit(&["std_array", "a", "--", "b.start", "1", "b.end"])
        .assert()
        .success()
        .stdout("std_array+=( b.start 1 b.end )\n");
}
