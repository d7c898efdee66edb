//! App version endpoint.

use crate::endpoints::query::endpoint_url;
use crate::endpoints::request::{default_http_client, fetch_data};
use crate::error::Result;
use crate::models::AppVersion;

/// Fetch the catalog service's version string.
///
/// Always sent through [`default_http_client`]; unlike the other endpoints
/// the transport is not a parameter.
pub async fn get_app_version(base_url: &str) -> Result<String> {
    let url = endpoint_url(base_url, "app_version", &[])?;
    let version: AppVersion = fetch_data(default_http_client(), url, "app version").await?;
    Ok(version.version)
}
