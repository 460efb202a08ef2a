//! CLI module for quizdb
//!
//! Provides command-line interface for:
//! - serve: Connect to the document store and serve the HTTP API
//! - check: Validate configuration and ping the store

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
