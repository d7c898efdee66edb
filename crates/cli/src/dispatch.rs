//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main`).
//!
//! Invariants:
//! - All commands receive the same cancellation token.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

pub(crate) async fn run_command(
    cli: Cli,
    config: scs_config::Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let output = cli.output.as_str();
    let output_file = cli.output_file.clone();

    match cli.command {
        Commands::Materials { command } => {
            commands::materials::run(config, command, output, output_file, cancel_token).await
        }
        Commands::Hardware { command } => {
            commands::hardware::run(config, command, output, output_file, cancel_token).await
        }
        Commands::Finishes { command } => {
            commands::finishes::run(config, command, output, output_file, cancel_token).await
        }
        Commands::Catalog => {
            commands::catalog::run(config, output, output_file, cancel_token).await
        }
        Commands::Version => {
            commands::version::run(config, output, output_file, cancel_token).await
        }
    }
}
