//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON, table and CSV renderings of catalog resources.
//! - Write rendered output to stdout or atomically to a file.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | CSV | Headers only, no data | `SKU,Name\n` |
//! | Table | Human message | `No materials found.` |

use anyhow::Result;
use scs_client::pages::CatalogPage;
use scs_client::{FinishOption, Hardware, Material};

mod common;
mod csv;
mod json;
mod table;

pub use common::output_result;
pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
}

impl OutputFormat {
    /// Parse from string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: json, table, csv",
                s
            ),
        }
    }
}

/// Renders catalog resources in one output format.
pub trait Formatter {
    fn format_materials(&self, materials: &[Material]) -> Result<String>;

    /// Single material including marketing copy and datasheet.
    fn format_material(&self, material: &Material) -> Result<String>;

    fn format_hardware(&self, hardware: &[Hardware]) -> Result<String>;

    fn format_finishes(&self, finishes: &[FinishOption]) -> Result<String>;

    /// A list of distinct values (groups, categories, ...) under `label`.
    fn format_values(&self, label: &str, values: &[String]) -> Result<String>;

    fn format_catalog(&self, page: &CatalogPage) -> Result<String>;

    fn format_version(&self, version: &str) -> Result<String>;
}

pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
