//! Finish options command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use scs_client::finish_types;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Subcommand)]
pub enum FinishesCommand {
    /// List finish options (default)
    List,
    /// List finish types
    Types,
}

pub async fn run(
    config: scs_config::Config,
    command: FinishesCommand,
    output_format: &str,
    output_file: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;
    let formatter = get_formatter(format);

    info!("Listing finish options");
    let finishes = cancellable!(client.finish_options(), cancel)?;

    let output = match command {
        FinishesCommand::List => formatter.format_finishes(&finishes)?,
        FinishesCommand::Types => formatter.format_values("Types", &finish_types(&finishes))?,
    };

    output_result(&output, format, output_file.as_ref())
}
