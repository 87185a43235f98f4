// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the command-line surface.
//!
//! [`greet`](crate::greet) and [`add`](crate::add) are total and never
//! produce these.

use thiserror::Error;

/// Errors raised while turning command-line input into results.
#[derive(Debug, Error)]
pub enum Error {
    /// Argument is neither an integer nor a float.
    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },

    /// Integer sum does not fit in 64 bits.
    #[error("integer overflow: {a} + {b}")]
    Overflow { a: i64, b: i64 },

    /// JSON rendering failed.
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
