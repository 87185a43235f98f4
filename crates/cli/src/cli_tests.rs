// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;
use crate::Error;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("greeter").chain(args.iter().copied())).unwrap()
}

#[test]
fn cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[parameterized(
    world = { &["greet", "World"], "Hello, World!" },
    empty = { &["greet", ""], "Hello, !" },
    ints = { &["add", "2", "3"], "5" },
    negative_operand = { &["add", "-1", "1"], "0" },
    zeros = { &["add", "0", "0"], "0" },
    float = { &["add", "1.5", "-0.25"], "1.25" },
)]
fn execute_text(args: &[&str], expected: &str) {
    assert_eq!(parse(args).execute().unwrap(), expected);
}

#[test]
fn output_flag_is_global() {
    let cli = parse(&["add", "2", "3", "--output", "json"]);
    assert_eq!(cli.output, OutputFormat::Json);
    assert_eq!(
        cli.execute().unwrap(),
        r#"{"command":"add","input":[2,3],"result":5}"#
    );
}

#[test]
fn verbose_flag_parses() {
    let cli = parse(&["-v", "greet", "x"]);
    assert!(cli.verbose);
}

#[test]
fn invalid_operand_is_reported() {
    let err = parse(&["add", "two", "3"]).execute().unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { ref input } if input == "two"));
}

#[test]
fn overflowing_operands_are_reported() {
    let max = i64::MAX.to_string();
    let err = parse(&["add", max.as_str(), "1"]).execute().unwrap_err();
    assert!(matches!(err, Error::Overflow { .. }));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    assert!(Cli::try_parse_from(["greeter"]).is_err());
}

#[test]
fn add_requires_two_operands() {
    assert!(Cli::try_parse_from(["greeter", "add", "1"]).is_err());
}
