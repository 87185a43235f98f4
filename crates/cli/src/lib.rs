// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Greeting and addition helpers.
//!
//! The library surface is two total functions, [`greet`] and [`add`].
//! The remaining modules back the `greeter` binary.

pub mod arith;
pub mod cli;
pub mod error;
pub mod greeting;
pub mod number;
pub mod output;

pub use arith::add;
pub use error::{Error, Result};
pub use greeting::greet;
pub use number::Number;
