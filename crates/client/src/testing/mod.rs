//! Testing utilities for catalog client tests.
//!
//! Fixture loading, record builders and proptest strategies.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use scs_client::testing::{load_fixture, sample_material};
//!
//! let fixture = load_fixture("materials/list_materials.json");
//! let material = sample_material(1, "AL-100", "Aluminum", "Aluminum", "Metals", "0.125");
//! ```

#[cfg(feature = "test-utils")]
pub mod generators;

use std::path::Path;

use crate::models::{FinishOption, Hardware, Material, Swatch};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A minimal in-stock material.
pub fn sample_material(
    id: u64,
    sku: &str,
    name: &str,
    category: &str,
    group: &str,
    thickness: &str,
) -> Material {
    Material {
        id,
        name: name.to_string(),
        sku: sku.to_string(),
        thickness: thickness.to_string(),
        category: category.to_string(),
        subcategory: None,
        group: group.to_string(),
        form: "sheet".to_string(),
        fullname: format!("{}\" {}", thickness, name),
        out_of_stock: false,
        expedited_production_permitted: false,
        new_material: false,
        limited_material: false,
        ferrous_material: None,
        priority: None,
        width: None,
        height: None,
        marketing: None,
        learn_more_url: None,
        example_image_url: None,
        category_description: None,
        group_description: None,
        name_description: None,
        post_message: None,
        post_message_url: None,
        datasheet: None,
    }
}

/// A hardware item with no description rows.
pub fn sample_hardware(id: u64, sku: &str, category: &str) -> Hardware {
    Hardware {
        id,
        sku: sku.to_string(),
        category: category.to_string(),
        subcategory: String::new(),
        out_of_stock: false,
        max_hw_diameter: String::new(),
        min_cl_to_edge_distance: String::new(),
        model_url: String::new(),
        preview_url: String::new(),
        preview_url_full: String::new(),
        preview_url_tech: String::new(),
        descriptions: Vec::new(),
    }
}

/// A public finish option with a light swatch.
pub fn sample_finish(id: u64, value: &str, finish_type: &str) -> FinishOption {
    FinishOption {
        id,
        value: value.to_string(),
        finish_type: finish_type.to_string(),
        color: value.to_string(),
        code: String::new(),
        example_image_url: String::new(),
        swatch: Swatch {
            url: format!("https://example.com/{}.png", value),
            size: 64,
            dark: None,
        },
        public: true,
        deleted: false,
    }
}
