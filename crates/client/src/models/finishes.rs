//! Finish option models for the catalog `/finish_options` endpoint.

use serde::{Deserialize, Serialize};

/// A surface finish (anodizing color, powder coat, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishOption {
    pub id: u64,
    /// e.g. "clear", "gold"
    pub value: String,
    /// e.g. "anodizing", "powder_coating"
    pub finish_type: String,
    #[serde(default)]
    pub color: String,
    /// e.g. "Type II, Class II"
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub example_image_url: String,
    pub swatch: Swatch,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub deleted: bool,
}

/// Swatch image shown next to a finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub url: String,
    pub size: u32,
    /// True when the swatch is dark colored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<bool>,
}
