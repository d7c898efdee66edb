//! Materials command implementation.
//!
//! Responsibilities:
//! - List materials with server-side options and client-side filters
//! - Show one material by SKU
//! - List the distinct groups, categories and thicknesses
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Output formatting details (see formatters module)

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use scs_client::{
    MaterialFilters, MaterialsQuery, filter_materials, material_categories, material_groups,
    material_thicknesses,
};
use tracing::info;

use crate::cancellation::CancellationToken;
use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter, output_result};

#[derive(Subcommand)]
pub enum MaterialsCommand {
    /// List materials (default)
    List {
        /// Include datasheet rows
        #[arg(long)]
        datasheet: bool,
        /// Only materials with this SKU (server-side)
        #[arg(long)]
        sku: Option<String>,
        /// Page number (server-side)
        #[arg(long)]
        page: Option<u32>,
        /// Page size (server-side)
        #[arg(long)]
        per_page: Option<u32>,
        /// Only this group, e.g. "Metals"
        #[arg(long)]
        group: Option<String>,
        /// Only this category, e.g. "Aluminum"
        #[arg(long)]
        category: Option<String>,
        /// Only this thickness, e.g. "0.125"
        #[arg(long)]
        thickness: Option<String>,
        /// Hide out-of-stock materials
        #[arg(long)]
        in_stock: bool,
        /// Case-insensitive match on name, SKU, category or full name
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single material by SKU
    Get {
        sku: String,
        /// Skip the datasheet
        #[arg(long)]
        no_datasheet: bool,
    },
    /// List material groups
    Groups,
    /// List material categories
    Categories {
        /// Only categories within this group
        #[arg(long)]
        group: Option<String>,
    },
    /// List thicknesses offered in a category
    Thicknesses { category: String },
}

pub async fn run(
    config: scs_config::Config,
    command: MaterialsCommand,
    output_format: &str,
    output_file: Option<PathBuf>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;
    let formatter = get_formatter(format);

    let output = match command {
        MaterialsCommand::List {
            datasheet,
            sku,
            page,
            per_page,
            group,
            category,
            thickness,
            in_stock,
            search,
        } => {
            let query = MaterialsQuery {
                include_datasheet: datasheet,
                sku,
                page,
                per_page,
            };
            let filters = MaterialFilters {
                group,
                category,
                thickness,
                in_stock,
                search,
            };
            info!("Listing materials");
            let materials = cancellable!(client.materials(&query), cancel)?;
            let materials = filter_materials(&materials, &filters);
            formatter.format_materials(&materials)?
        }
        MaterialsCommand::Get { sku, no_datasheet } => {
            info!("Fetching material {}", sku);
            let material = cancellable!(client.material_by_sku_with(&sku, !no_datasheet), cancel)?
                .ok_or_else(|| CliError::NotFound(format!("Material not found: {}", sku)))?;
            formatter.format_material(&material)?
        }
        MaterialsCommand::Groups => {
            let query = MaterialsQuery::default();
            let materials = cancellable!(client.materials(&query), cancel)?;
            formatter.format_values("Groups", &material_groups(&materials))?
        }
        MaterialsCommand::Categories { group } => {
            let query = MaterialsQuery::default();
            let materials = cancellable!(client.materials(&query), cancel)?;
            let categories = material_categories(&materials, group.as_deref());
            formatter.format_values("Categories", &categories)?
        }
        MaterialsCommand::Thicknesses { category } => {
            let query = MaterialsQuery::default();
            let materials = cancellable!(client.materials(&query), cancel)?;
            let thicknesses = material_thicknesses(&materials, &category);
            formatter.format_values("Thicknesses", &thicknesses)?
        }
    };

    output_result(&output, format, output_file.as_ref())
}
