//! Service version command.

use std::path::PathBuf;

use anyhow::Result;

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

    let version = cancellable!(client.app_version(), cancel)?;

    let output = get_formatter(format).format_version(&version)?;
    output_result(&output, format, output_file.as_ref())
}
