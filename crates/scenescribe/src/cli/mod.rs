//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! scenescribe binary.

mod commands;
mod convert;

pub use commands::{Cli, Commands};
pub use convert::run_convert;
