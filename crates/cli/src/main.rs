// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! argsplit: split command-line tokens into named shell arrays.
//!
//! Invoked as `argsplit <label> [<name>...] -- [<token>...]`. Tokens between
//! `<name>.start` and `<name>.end` markers land in the array `<name>`;
//! everything else lands in `<label>`. Output is one `name+=( ... )` line
//! per non-empty array, ready for `eval` in a POSIX shell:
//!
//! ```sh
//! eval "$(argsplit std_array a b -- 1 2 a.start a1 'a 2' a.end)"
//! ```

mod args;
mod exit_error;

use args::parse_argv;
use exit_error::ExitError;

fn main() {
    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match run(argv) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(err) => {
            eprintln!("error: {}", err.message);
            if err.code == exit_error::USAGE {
                eprintln!("usage: argsplit <label> [<name>...] -- [<token>...]");
            }
            std::process::exit(err.code);
        }
    }
}

/// Interpret the argument vector and produce the rendered output lines.
fn run(argv: Vec<String>) -> Result<Vec<String>, ExitError> {
    let invocation = parse_argv(argv)?;
    let lines = argsplit_core::render(
        &invocation.residual_label,
        &invocation.names,
        &invocation.tokens,
    )?;
    Ok(lines)
}
