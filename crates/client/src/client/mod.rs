//! Catalog service client.
//!
//! [`CatalogClient`] bundles a transport with a base URL and exposes the
//! endpoint functions as methods.
//!
//! # What this module does NOT handle:
//! - Request construction and envelope parsing (delegated to [`crate::endpoints`])
//! - Deriving filter options from fetched data (see [`crate::helpers`])

pub mod builder;

use crate::endpoints::{self, HardwareQuery, MaterialsQuery};
use crate::error::Result;
use crate::models::{FinishOption, Hardware, Material};

/// Catalog service client.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Client for the public service using the shared default transport.
    pub fn new() -> Self {
        Self {
            http: endpoints::default_http_client().clone(),
            base_url: scs_config::constants::DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn builder() -> builder::CatalogClientBuilder {
        builder::CatalogClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The underlying transport.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub async fn materials(&self, query: &MaterialsQuery) -> Result<Vec<Material>> {
        endpoints::get_materials(&self.http, &self.base_url, query).await
    }

    /// Look up a material by SKU, datasheet included.
    pub async fn material_by_sku(&self, sku: &str) -> Result<Option<Material>> {
        self.material_by_sku_with(sku, true).await
    }

    pub async fn material_by_sku_with(
        &self,
        sku: &str,
        include_datasheet: bool,
    ) -> Result<Option<Material>> {
        endpoints::get_material_by_sku(&self.http, &self.base_url, sku, include_datasheet).await
    }

    pub async fn hardware(&self, query: &HardwareQuery) -> Result<Vec<Hardware>> {
        endpoints::get_hardware(&self.http, &self.base_url, query).await
    }

    pub async fn finish_options(&self) -> Result<Vec<FinishOption>> {
        endpoints::get_finish_options(&self.http, &self.base_url).await
    }

    /// Service version. Goes through the default transport, not `self.http`.
    pub async fn app_version(&self) -> Result<String> {
        endpoints::get_app_version(&self.base_url).await
    }
}
