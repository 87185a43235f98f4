// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result rendering for the CLI.

use std::fmt::Display;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare result.
    #[default]
    Text,
    /// One JSON object per result.
    Json,
}

/// A command, its inputs and what it produced.
#[derive(Debug, Serialize)]
pub struct Outcome<T> {
    pub command: &'static str,
    pub input: Vec<T>,
    pub result: T,
}

impl<T> Outcome<T> {
    pub fn new(command: &'static str, input: Vec<T>, result: T) -> Self {
        Self { command, input, result }
    }
}

/// Render an outcome as a single line, without the trailing newline.
pub fn render<T: Display + Serialize>(format: OutputFormat, outcome: &Outcome<T>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome.result.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(outcome)?),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
