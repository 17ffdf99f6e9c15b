//! Command-line front end for the eventplan recurrence engine.
//!
//! This crate provides the `eventplan` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use error::{CliError, CliResult, ConfigError};
