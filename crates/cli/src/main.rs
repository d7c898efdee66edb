//! scs-cli - Command-line interface for the SendCutSend catalog.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load configuration and run catalog commands via the client library.
//! - Format and display results (table, JSON, CSV).
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
#[macro_use]
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use anyhow::{Context, Result};
use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use scs_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Resolve configuration: CLI flags > environment > config file > defaults.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank paths fall back to SCS_CONFIG_PATH / the default location.
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader
        .from_env()
        .context("Failed to load configuration from environment")?
        .from_config_file()
        .context("Failed to load configuration file")?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }

    loader.build().context("Failed to build configuration")
}

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };
    tracing::debug!(base_url = %config.connection.base_url, "Configuration loaded");

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            let code = e.exit_code();
            if code.is_retryable() {
                eprintln!("Hint: the catalog service may recover; retry the command later.");
            }
            code
        }
    };

    std::process::exit(exit_code.as_i32());
}
