// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive, and command dispatch.

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::output::{self, OutputFormat, Outcome};
use crate::{Number, greet};

/// Greet people and add numbers
#[derive(Debug, Parser)]
#[command(name = "greeter")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a greeting for NAME
    Greet(GreetArgs),
    /// Print the sum of two numbers
    Add(AddArgs),
}

#[derive(Debug, clap::Args)]
pub struct GreetArgs {
    /// Name to greet (may be empty)
    pub name: String,
}

#[derive(Debug, clap::Args)]
pub struct AddArgs {
    /// First operand
    #[arg(allow_negative_numbers = true)]
    pub a: String,

    /// Second operand
    #[arg(allow_negative_numbers = true)]
    pub b: String,
}

impl Cli {
    /// Run the selected command and return the rendered line.
    pub fn execute(&self) -> Result<String> {
        match &self.command {
            Command::Greet(args) => {
                tracing::debug!("greeting {:?}", args.name);
                let result = greet(&args.name);
                output::render(self.output, &Outcome::new("greet", vec![args.name.clone()], result))
            }
            Command::Add(args) => {
                let a: Number = args.a.parse()?;
                let b: Number = args.b.parse()?;
                tracing::debug!("adding {a:?} and {b:?}");
                let sum = a.checked_sum(b)?;
                output::render(self.output, &Outcome::new("add", vec![a, b], sum))
            }
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
