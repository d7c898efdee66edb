//! Catalog summary command.
//!
//! Loads materials and hardware together through the page loader; if either
//! fetch fails nothing is printed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use scs_client::pages::load_catalog_page;
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::formatters::{OutputFormat, get_formatter, output_result};

pub async fn run(
    config: scs_config::Config,
    output_format: &str,
    output_file: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;

    info!("Loading catalog");
    let page = cancellable!(load_catalog_page(&client), cancel).context("Failed to load catalog")?;

    let output = get_formatter(format).format_catalog(&page)?;
    output_result(&output, format, output_file.as_ref())
}
