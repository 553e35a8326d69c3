// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! POSIX shell quoting for rendered tokens.

/// Characters a POSIX shell re-parses as part of a bare word.
#[inline]
fn is_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(ch, '_' | '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-')
}

/// Quote `token` so a POSIX-compatible shell re-parses it as a single word.
///
/// Tokens made only of safe characters pass through unchanged. Anything
/// else is wrapped in single quotes, with embedded single quotes escaped
/// using the `'\''` idiom (end quote, escaped literal quote, start quote).
/// The empty token quotes to `''`.
pub fn quote(token: &str) -> String {
    if token.is_empty() {
        return "''".to_string();
    }
    if token.chars().all(is_safe) {
        return token.to_string();
    }
    format!("'{}'", token.replace('\'', "'\\''"))
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
