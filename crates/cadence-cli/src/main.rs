use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cadence_core::error::CoreError;
use cadence_core::validation::EndDateError;

mod cli;
mod commands;
mod config;
mod parser;
mod views;

fn main() {
    let (config, config_error) = match config::Config::new() {
        Ok(config) => (config, None),
        Err(e) => (config::Config::default(), Some(e)),
    };

    init_tracing(&config.log_level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Failed to load configuration, using defaults");
    }

    let cli = cli::Cli::parse();

    let result = match cli.command {
        cli::Commands::Generate(command) => commands::generate::generate_events(command, &config),
        cli::Commands::Validate(command) => commands::validate::validate_command(command, &config),
        cli::Commands::Label(command) => commands::label::label_command(command),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(end_date_error) = err.downcast_ref::<EndDateError>() {
        match end_date_error {
            EndDateError::AfterMaximum { max } => {
                eprintln!(
                    "{} end date must be on or before {}",
                    "Error:".style(error_style),
                    max.yellow()
                );
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), end_date_error),
        }
    } else if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::InvalidDate(s) => {
                eprintln!("{} Invalid date: {}", "Error:".style(error_style), s);
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}
