// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for argsplit CLI specs.

use assert_cmd::Command;

/// A fresh `argsplit` invocation with the given argument vector.
pub fn argsplit(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("argsplit").expect("argsplit binary builds");
    cmd.args(args);
    cmd
}
