//! Hardware endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::query::{endpoint_url, push_page_params};
use crate::endpoints::request::fetch_data;
use crate::error::Result;
use crate::models::Hardware;

/// Query options for `GET /hardware`. Zero paging values count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HardwareQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl HardwareQuery {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_page_params(&mut params, self.page, self.per_page);
        params
    }
}

/// List hardware items.
pub async fn get_hardware(
    client: &Client,
    base_url: &str,
    query: &HardwareQuery,
) -> Result<Vec<Hardware>> {
    let url = endpoint_url(base_url, "hardware", &query.query_pairs())?;
    let hardware: Vec<Hardware> = fetch_data(client, url, "hardware").await?;
    debug!(count = hardware.len(), "Fetched hardware");
    Ok(hardware)
}
