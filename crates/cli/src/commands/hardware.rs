//! Hardware command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use scs_client::{HardwareQuery, hardware_categories};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Subcommand)]
pub enum HardwareCommand {
    /// List hardware items (default)
    List {
        /// Page number (server-side)
        #[arg(long)]
        page: Option<u32>,
        /// Page size (server-side)
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// List hardware categories
    Categories,
}

pub async fn run(
    config: scs_config::Config,
    command: HardwareCommand,
    output_format: &str,
    output_file: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;
    let formatter = get_formatter(format);

    let output = match command {
        HardwareCommand::List { page, per_page } => {
            info!("Listing hardware");
            let query = HardwareQuery { page, per_page };
            let hardware = cancellable!(client.hardware(&query), cancel)?;
            formatter.format_hardware(&hardware)?
        }
        HardwareCommand::Categories => {
            let query = HardwareQuery::default();
            let hardware = cancellable!(client.hardware(&query), cancel)?;
            formatter.format_values("Categories", &hardware_categories(&hardware))?
        }
    };

    output_result(&output, format, output_file.as_ref())
}
