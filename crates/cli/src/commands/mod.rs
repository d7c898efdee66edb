//! CLI command implementations.

pub mod catalog;
pub mod finishes;
pub mod hardware;
pub mod materials;
pub mod version;

use anyhow::{Context, Result};
use scs_client::CatalogClient;

/// Build a catalog client from loaded configuration.
pub fn build_client_from_config(config: &scs_config::Config) -> Result<CatalogClient> {
    CatalogClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build catalog client")
}
