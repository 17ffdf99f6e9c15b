//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::CliConfig;

/// eventplan - Recurring event rules from the command line
#[derive(Debug, Parser)]
#[command(name = "eventplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "EVENTPLAN_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Returns the output format from the `--json` flag or the config file.
    pub fn output_format(&self, config: &CliConfig) -> OutputFormat {
        if self.json || config.output.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a rule and show its structure
    Parse {
        /// Rule text, e.g. WEEKLY:MON,FRI
        rule: String,
    },

    /// List the dates a rule fires on
    Expand {
        /// Rule text, e.g. MONTHLY:2:TUE
        rule: String,

        /// First day of the window (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,

        /// Last day of the window, inclusive (defaults to the configured window length)
        #[arg(long)]
        to: Option<NaiveDate>,

        /// Day to leave out (can be repeated)
        #[arg(long = "skip", action = clap::ArgAction::Append)]
        skip: Vec<NaiveDate>,
    },

    /// Check whether a rule fires on one date
    Occurs {
        /// Rule text
        rule: String,

        /// Date to check (YYYY-MM-DD)
        date: NaiveDate,
    },

    /// Describe a rule in plain English
    Summary {
        /// Rule text
        rule: String,

        /// First day of the series
        #[arg(long)]
        start: NaiveDate,

        /// Last day of the series; omit for a series that never ends
        #[arg(long)]
        end: Option<NaiveDate>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
