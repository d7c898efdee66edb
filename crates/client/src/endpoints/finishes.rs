//! Finish option endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::query::endpoint_url;
use crate::endpoints::request::fetch_data;
use crate::error::Result;
use crate::models::FinishOption;

/// List every finish option. The endpoint takes no filters.
pub async fn get_finish_options(client: &Client, base_url: &str) -> Result<Vec<FinishOption>> {
    let url = endpoint_url(base_url, "finish_options", &[])?;
    let finishes: Vec<FinishOption> = fetch_data(client, url, "finish options").await?;
    debug!(count = finishes.len(), "Fetched finish options");
    Ok(finishes)
}
