// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numbers read from text.
//!
//! Integers stay integers until a float joins the sum, at which point
//! both operands are promoted to `f64`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::arith::add;
use crate::error::{Error, Result};

/// A signed integer or a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Value as `f64`. Large integers lose precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    /// Sum two numbers without panicking or wrapping.
    ///
    /// Returns [`Error::Overflow`] when two integers do not fit in `i64`.
    pub fn checked_sum(self, other: Number) -> Result<Number> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a
                .checked_add(b)
                .map(Number::Int)
                .ok_or(Error::Overflow { a, b }),
            (a, b) => Ok(Number::Float(add(a.as_f64(), b.as_f64()))),
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Ok(Number::Int(n));
        }
        trimmed
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|_| Error::InvalidNumber { input: s.to_string() })
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

// serde_json writes non-finite floats as null.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Number::Int(n) => serializer.serialize_i64(*n),
            Number::Float(x) => serializer.serialize_f64(*x),
        }
    }
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
