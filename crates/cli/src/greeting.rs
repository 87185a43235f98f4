// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Greeting formatter.

/// Text placed before the name.
pub const GREETING_PREFIX: &str = "Hello, ";

/// Text placed after the name.
pub const GREETING_SUFFIX: &str = "!";

/// Greet `name`, e.g. `greet("World") == "Hello, World!"`.
///
/// Any input is accepted, including the empty string.
pub fn greet(name: &str) -> String {
    format!("{GREETING_PREFIX}{name}{GREETING_SUFFIX}")
}

#[cfg(test)]
#[path = "greeting_tests.rs"]
mod tests;
