//! Table formatter implementation.
//!
//! Tab-separated columns with a header row; empty lists render a message.

use anyhow::Result;
use scs_client::models::DatasheetEntryType;
use scs_client::pages::CatalogPage;
use scs_client::{FinishOption, Hardware, Material, hardware_categories, material_groups};

use crate::formatters::Formatter;
use crate::formatters::common::format_missing;

pub struct TableFormatter;

fn stock_label(out_of_stock: bool) -> &'static str {
    if out_of_stock { "out of stock" } else { "in stock" }
}

impl Formatter for TableFormatter {
    fn format_materials(&self, materials: &[Material]) -> Result<String> {
        if materials.is_empty() {
            return Ok("No materials found.".to_string());
        }

        let mut output = String::from("SKU\tName\tThickness\tCategory\tGroup\tStock\n");
        for m in materials {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\n",
                m.sku,
                m.name,
                m.thickness,
                m.category,
                m.group,
                stock_label(m.out_of_stock)
            ));
        }
        Ok(output)
    }

    fn format_material(&self, material: &Material) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("SKU: {}\n", material.sku));
        output.push_str(&format!("Name: {}\n", material.name));
        output.push_str(&format!(
            "Full Name: {}\n",
            format_missing(Some(&material.fullname))
        ));
        output.push_str(&format!("Group: {}\n", material.group));
        output.push_str(&format!("Category: {}\n", material.category));
        output.push_str(&format!(
            "Subcategory: {}\n",
            format_missing(material.subcategory.as_deref())
        ));
        output.push_str(&format!("Thickness: {}\n", material.thickness));
        output.push_str(&format!("Form: {}\n", material.form));
        output.push_str(&format!("Stock: {}\n", stock_label(material.out_of_stock)));

        if let Some(marketing) = &material.marketing {
            output.push_str(&format!(
                "Learn More: {}\n",
                format_missing(Some(&marketing.learn_more_url))
            ));
        }

        if let Some(datasheet) = material.datasheet.as_deref().filter(|d| !d.is_empty()) {
            output.push_str("\nDatasheet:\n");
            for entry in datasheet {
                match entry.entry_type {
                    DatasheetEntryType::Header => {
                        output.push_str(&format!("  [{}]\n", entry.field));
                    }
                    _ => {
                        output.push_str(&format!("    {}: {}\n", entry.field, entry.value));
                    }
                }
            }
        }

        Ok(output)
    }

    fn format_hardware(&self, hardware: &[Hardware]) -> Result<String> {
        if hardware.is_empty() {
            return Ok("No hardware found.".to_string());
        }

        let mut output = String::from("SKU\tCategory\tSubcategory\tMax Diameter\tStock\n");
        for h in hardware {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\n",
                h.sku,
                h.category,
                format_missing(Some(&h.subcategory)),
                format_missing(Some(&h.max_hw_diameter)),
                stock_label(h.out_of_stock)
            ));
        }
        Ok(output)
    }

    fn format_finishes(&self, finishes: &[FinishOption]) -> Result<String> {
        if finishes.is_empty() {
            return Ok("No finish options found.".to_string());
        }

        let mut output = String::from("Type\tValue\tColor\tCode\n");
        for f in finishes {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                f.finish_type,
                f.value,
                format_missing(Some(&f.color)),
                format_missing(Some(&f.code))
            ));
        }
        Ok(output)
    }

    fn format_values(&self, label: &str, values: &[String]) -> Result<String> {
        if values.is_empty() {
            return Ok(format!("No {} found.", label.to_lowercase()));
        }

        let mut output = format!("{}\n", label);
        for value in values {
            output.push_str(value);
            output.push('\n');
        }
        Ok(output)
    }

    fn format_catalog(&self, page: &CatalogPage) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("Materials: {}\n", page.materials.len()));
        for group in material_groups(&page.materials) {
            let count = page.materials.iter().filter(|m| m.group == group).count();
            output.push_str(&format!("  {}\t{}\n", group, count));
        }
        output.push_str(&format!("Hardware: {}\n", page.hardware.len()));
        for category in hardware_categories(&page.hardware) {
            let count = page
                .hardware
                .iter()
                .filter(|h| h.category == category)
                .count();
            output.push_str(&format!("  {}\t{}\n", category, count));
        }
        Ok(output)
    }

    fn format_version(&self, version: &str) -> Result<String> {
        Ok(format!("{}\n", version))
    }
}
