//! CSV formatter implementation.
//!
//! RFC 4180 escaping; empty lists still emit the header row.

use anyhow::Result;
use scs_client::pages::CatalogPage;
use scs_client::{FinishOption, Hardware, Material};

use crate::formatters::Formatter;
use crate::formatters::common::{build_csv_header, build_csv_row};

pub struct CsvFormatter;

const MATERIAL_FIELDS: &[&str] = &[
    "id",
    "sku",
    "name",
    "thickness",
    "category",
    "group",
    "form",
    "fullname",
    "out_of_stock",
];

fn material_row(m: &Material) -> String {
    build_csv_row(&[
        m.id.to_string(),
        m.sku.clone(),
        m.name.clone(),
        m.thickness.clone(),
        m.category.clone(),
        m.group.clone(),
        m.form.clone(),
        m.fullname.clone(),
        m.out_of_stock.to_string(),
    ])
}

impl Formatter for CsvFormatter {
    fn format_materials(&self, materials: &[Material]) -> Result<String> {
        let mut output = build_csv_header(MATERIAL_FIELDS);
        for m in materials {
            output.push_str(&material_row(m));
        }
        Ok(output)
    }

    fn format_material(&self, material: &Material) -> Result<String> {
        let mut output = build_csv_header(MATERIAL_FIELDS);
        output.push_str(&material_row(material));
        Ok(output)
    }

    fn format_hardware(&self, hardware: &[Hardware]) -> Result<String> {
        let mut output = build_csv_header(&[
            "id",
            "sku",
            "category",
            "subcategory",
            "max_hw_diameter",
            "min_cl_to_edge_distance",
            "out_of_stock",
        ]);
        for h in hardware {
            output.push_str(&build_csv_row(&[
                h.id.to_string(),
                h.sku.clone(),
                h.category.clone(),
                h.subcategory.clone(),
                h.max_hw_diameter.clone(),
                h.min_cl_to_edge_distance.clone(),
                h.out_of_stock.to_string(),
            ]));
        }
        Ok(output)
    }

    fn format_finishes(&self, finishes: &[FinishOption]) -> Result<String> {
        let mut output = build_csv_header(&["id", "finish_type", "value", "color", "code"]);
        for f in finishes {
            output.push_str(&build_csv_row(&[
                f.id.to_string(),
                f.finish_type.clone(),
                f.value.clone(),
                f.color.clone(),
                f.code.clone(),
            ]));
        }
        Ok(output)
    }

    fn format_values(&self, label: &str, values: &[String]) -> Result<String> {
        let mut output = build_csv_header(&[label]);
        for value in values {
            output.push_str(&build_csv_row(std::slice::from_ref(value)));
        }
        Ok(output)
    }

    fn format_catalog(&self, page: &CatalogPage) -> Result<String> {
        let mut output = build_csv_header(&["kind", "sku", "category"]);
        for m in &page.materials {
            output.push_str(&build_csv_row(&[
                "material".to_string(),
                m.sku.clone(),
                m.category.clone(),
            ]));
        }
        for h in &page.hardware {
            output.push_str(&build_csv_row(&[
                "hardware".to_string(),
                h.sku.clone(),
                h.category.clone(),
            ]));
        }
        Ok(output)
    }

    fn format_version(&self, version: &str) -> Result<String> {
        let mut output = build_csv_header(&["version"]);
        output.push_str(&build_csv_row(&[version.to_string()]));
        Ok(output)
    }
}
