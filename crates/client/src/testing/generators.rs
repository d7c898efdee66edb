//! Proptest strategies for catalog records.
//!
//! Field values are drawn from small pools so generated catalogs contain
//! duplicate groups, categories and thicknesses.

use proptest::prelude::*;

use crate::models::{FinishOption, Hardware, Material};
use crate::testing::{sample_finish, sample_hardware, sample_material};

const GROUPS: &[&str] = &["Metals", "Plastics", "Composites", "Wood"];
const CATEGORIES: &[&str] = &["Aluminum", "Steel", "Stainless", "Acrylic", "G10", "Birch"];
const THICKNESSES: &[&str] = &["0.040", "0.063", "0.125", "0.250", "0.500"];
const HARDWARE_CATEGORIES: &[&str] = &["Nut", "Stud", "Standoff", "Rivet"];
const FINISH_TYPES: &[&str] = &["anodizing", "powder_coating", "plating", "tumbling"];

/// Strategy for a single material.
pub fn material_strategy() -> impl Strategy<Value = Material> {
    (
        any::<u64>(),
        "[A-Z]{2,4}-[0-9]{2,4}",
        "[A-Za-z ]{1,16}",
        prop::sample::select(CATEGORIES),
        prop::sample::select(GROUPS),
        prop::sample::select(THICKNESSES),
        any::<bool>(),
    )
        .prop_map(|(id, sku, name, category, group, thickness, out_of_stock)| {
            let mut material = sample_material(id, &sku, &name, category, group, thickness);
            material.out_of_stock = out_of_stock;
            material
        })
}

/// Strategy for a catalog of up to `max` materials.
pub fn materials_strategy(max: usize) -> impl Strategy<Value = Vec<Material>> {
    prop::collection::vec(material_strategy(), 0..=max)
}

pub fn hardware_strategy() -> impl Strategy<Value = Hardware> {
    (
        any::<u64>(),
        "[A-Z]{2,4}-[0-9]{3}-[0-9]",
        prop::sample::select(HARDWARE_CATEGORIES),
    )
        .prop_map(|(id, sku, category)| sample_hardware(id, &sku, category))
}

pub fn finish_strategy() -> impl Strategy<Value = FinishOption> {
    (
        any::<u64>(),
        "[a-z]{3,10}",
        prop::sample::select(FINISH_TYPES),
    )
        .prop_map(|(id, value, finish_type)| sample_finish(id, &value, finish_type))
}
