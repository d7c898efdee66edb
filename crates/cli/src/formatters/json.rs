//! JSON formatter implementation.
//!
//! Every resource is rendered as pretty-printed JSON of its full model.

use anyhow::Result;
use scs_client::pages::CatalogPage;
use scs_client::{FinishOption, Hardware, Material};

use crate::formatters::Formatter;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_materials(&self, materials: &[Material]) -> Result<String> {
        Ok(serde_json::to_string_pretty(materials)?)
    }

    fn format_material(&self, material: &Material) -> Result<String> {
        Ok(serde_json::to_string_pretty(material)?)
    }

    fn format_hardware(&self, hardware: &[Hardware]) -> Result<String> {
        Ok(serde_json::to_string_pretty(hardware)?)
    }

    fn format_finishes(&self, finishes: &[FinishOption]) -> Result<String> {
        Ok(serde_json::to_string_pretty(finishes)?)
    }

    fn format_values(&self, _label: &str, values: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(values)?)
    }

    fn format_catalog(&self, page: &CatalogPage) -> Result<String> {
        Ok(serde_json::to_string_pretty(page)?)
    }

    fn format_version(&self, version: &str) -> Result<String> {
        Ok(serde_json::to_string_pretty(&serde_json::json!({ "version": version }))?)
    }
}
