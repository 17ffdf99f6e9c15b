//! Subcommand implementations.
//!
//! Commands return the text to print; `main` writes it to stdout.

pub mod config;
pub mod rule;
