//! Page data loaders for the storefront.
//!
//! Each loader fetches everything one storefront page needs and returns a
//! serializable struct for the renderer. A load either yields a complete page
//! or fails; partial pages are never produced.

use serde::Serialize;
use tracing::debug;

use crate::client::CatalogClient;
use crate::endpoints::{HardwareQuery, MaterialsQuery};
use crate::error::Result;
use crate::models::{FinishOption, Hardware, Material};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialsPage {
    pub materials: Vec<Material>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardwarePage {
    pub hardware: Vec<Hardware>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinishesPage {
    pub finishes: Vec<FinishOption>,
}

/// Landing page: materials and hardware side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogPage {
    pub materials: Vec<Material>,
    pub hardware: Vec<Hardware>,
}

pub async fn load_materials_page(client: &CatalogClient) -> Result<MaterialsPage> {
    let materials = client.materials(&MaterialsQuery::default()).await?;
    Ok(MaterialsPage { materials })
}

pub async fn load_hardware_page(client: &CatalogClient) -> Result<HardwarePage> {
    let hardware = client.hardware(&HardwareQuery::default()).await?;
    Ok(HardwarePage { hardware })
}

pub async fn load_finishes_page(client: &CatalogClient) -> Result<FinishesPage> {
    let finishes = client.finish_options().await?;
    Ok(FinishesPage { finishes })
}

/// Fetch materials and hardware concurrently.
///
/// The first failure aborts the load and is returned as-is.
pub async fn load_catalog_page(client: &CatalogClient) -> Result<CatalogPage> {
    let materials_query = MaterialsQuery::default();
    let hardware_query = HardwareQuery::default();
    let (materials, hardware) = futures::try_join!(
        client.materials(&materials_query),
        client.hardware(&hardware_query)
    )?;
    debug!(
        materials = materials.len(),
        hardware = hardware.len(),
        "Loaded catalog page"
    );
    Ok(CatalogPage {
        materials,
        hardware,
    })
}
