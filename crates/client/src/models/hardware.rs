//! Hardware models for the catalog `/hardware` endpoint.

use serde::{Deserialize, Serialize};

/// A press-in hardware item (nut, stud, standoff, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hardware {
    pub id: u64,
    pub sku: String,
    /// e.g. "Nut", "Stud"
    pub category: String,
    /// e.g. "A286 Hardened SST"
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub out_of_stock: bool,
    #[serde(default)]
    pub max_hw_diameter: String,
    #[serde(default)]
    pub min_cl_to_edge_distance: String,
    /// Link to the `.stl` model.
    #[serde(default)]
    pub model_url: String,
    #[serde(default)]
    pub preview_url: String,
    #[serde(default)]
    pub preview_url_full: String,
    #[serde(default)]
    pub preview_url_tech: String,
    /// Specification rows; order is significant.
    #[serde(default)]
    pub descriptions: Vec<HardwareDescription>,
}

/// A field/value row describing a hardware item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareDescription {
    pub field: String,
    pub value: String,
}
