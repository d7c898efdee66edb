//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global options to their environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration (see `scs_config::ConfigLoader`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "scs-cli")]
#[command(about = "Browse the SendCutSend materials, hardware and finish catalog", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  scs-cli materials list --group Metals --in-stock\n  scs-cli materials get AL6061-125\n  scs-cli materials thicknesses Aluminum\n  scs-cli hardware categories\n  scs-cli -o json finishes list\n  scs-cli catalog\n"
)]
pub struct Cli {
    /// Base URL of the catalog service (e.g., https://app.sendcutsend.com)
    #[arg(short, long, global = true, env = "SCS_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SCS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "SCS_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format (table, json, csv)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and inspect materials
    Materials {
        #[command(subcommand)]
        command: commands::materials::MaterialsCommand,
    },

    /// List press-in hardware
    Hardware {
        #[command(subcommand)]
        command: commands::hardware::HardwareCommand,
    },

    /// List finish options
    Finishes {
        #[command(subcommand)]
        command: commands::finishes::FinishesCommand,
    },

    /// Summarize materials and hardware in one view
    Catalog,

    /// Show the catalog service version
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_materials_list_filters() {
        let cli = Cli::try_parse_from([
            "scs-cli",
            "-o",
            "json",
            "materials",
            "list",
            "--group",
            "Metals",
            "--in-stock",
            "--search",
            "alum",
        ])
        .unwrap();
        assert_eq!(cli.output, "json");
        match cli.command {
            Commands::Materials {
                command:
                    commands::materials::MaterialsCommand::List {
                        group,
                        in_stock,
                        search,
                        ..
                    },
            } => {
                assert_eq!(group.as_deref(), Some("Metals"));
                assert!(in_stock);
                assert_eq!(search.as_deref(), Some("alum"));
            }
            _ => panic!("expected materials list"),
        }
    }

    #[test]
    fn test_parse_global_option_after_subcommand() {
        let cli = Cli::try_parse_from(["scs-cli", "version", "--base-url", "http://localhost:1"])
            .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:1"));
    }
}
