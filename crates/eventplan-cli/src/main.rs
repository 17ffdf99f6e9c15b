//! eventplan CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};

use eventplan_cli::cli::{Cli, Command, ConfigAction};
use eventplan_cli::commands;
use eventplan_cli::config::CliConfig;
use eventplan_cli::error::CliResult;
use eventplan_core::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<String> {
    // An explicit config path must load; the default one may be absent or broken.
    let (config, config_error) = match cli.config {
        Some(ref path) => (CliConfig::load_from(path)?, None),
        None => match CliConfig::load() {
            Ok(config) => (config, None),
            Err(e) => (CliConfig::default(), Some(e)),
        },
    };

    let tracing_config = if cli.debug || config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    init_tracing(tracing_config)?;

    if let Some(e) = config_error {
        warn!(error = %e, "Ignoring unreadable config file, using defaults");
    }

    let config_path = cli.config.clone().unwrap_or_else(CliConfig::default_path);
    debug!(path = %config_path.display(), "Configuration loaded");

    let format = cli.output_format(&config);
    match cli.command {
        Command::Parse { rule } => commands::rule::parse_rule(&rule, format),
        Command::Expand {
            rule,
            from,
            to,
            skip,
        } => commands::rule::expand(&rule, from, to, &skip, &config.expansion, format),
        Command::Occurs { rule, date } => commands::rule::occurs(&rule, date, format),
        Command::Summary { rule, start, end } => {
            commands::rule::summary(&rule, start, end, format)
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(&config_path),
        },
    }
}
