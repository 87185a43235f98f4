// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Adder.

use std::ops::Add;

/// Sum two values of the same numeric type.
///
/// Follows the `Add` impl of `T`: integer overflow panics in debug builds
/// and wraps in release builds, floats follow IEEE-754. Use
/// [`Number::checked_sum`](crate::Number::checked_sum) when the operands
/// come from untrusted input.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

#[cfg(test)]
#[path = "arith_tests.rs"]
mod tests;
