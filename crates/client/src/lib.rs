//! SendCutSend catalog client.
//!
//! Typed access to the public catalog service (materials, hardware, finish
//! options, app version), pure helpers that derive filter options from the
//! fetched data, page loaders for the storefront and the session seam used by
//! its sign-in routes.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod helpers;
pub mod models;
pub mod pages;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::CatalogClient;
pub use client::builder::CatalogClientBuilder;
pub use endpoints::{HardwareQuery, MaterialsQuery};
pub use error::{ClientError, Result};
pub use helpers::{
    MaterialFilters, filter_materials, finish_types, hardware_categories, material_categories,
    material_groups, material_thicknesses,
};
pub use models::{
    AppVersion, DatasheetEntry, DatasheetEntryType, FinishOption, Hardware, HardwareDescription,
    Marketing, Material, Swatch,
};
