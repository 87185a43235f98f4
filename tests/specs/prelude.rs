//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::process::Command;

/// Returns a Command configured to run the greeter binary
pub fn greeter_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("greeter"));
    cmd.env_remove("GREETER_LOG");
    cmd
}
