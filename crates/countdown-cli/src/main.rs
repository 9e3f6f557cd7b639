use anyhow::{bail, Result};
use clap::Parser;
use countdown_core::error::CoreError;
use owo_colors::{OwoColorize, Style};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod util;
mod views;

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            handle_error(e);
            std::process::exit(1);
        }
    };
    debug!(?config, "loaded configuration");

    let result = match cli.command {
        cli::Commands::Annotate(command) => commands::annotate::annotate_text(command, &config),
        cli::Commands::List(command) => commands::list::list_dates(command, &config),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("COUNTDOWN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<config::Config> {
    match path {
        Some(path) => {
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            Ok(config::Config::from_file(path)?)
        }
        None => Ok(config::Config::new()?),
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::InvalidDate(literal)) => {
            eprintln!(
                "{} Invalid date '{}'. Use YYYY-MM-DD, e.g. 2025-06-20",
                "Error:".style(error_style),
                literal.yellow()
            );
        }
        Some(CoreError::InvalidUrgency(value)) => {
            eprintln!(
                "{} Unknown urgency '{}'. Expected one of: overdue, due, nearly-due, future",
                "Error:".style(error_style),
                value.yellow()
            );
        }
        None => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
