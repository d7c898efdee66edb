//! Shared GET-and-unwrap helper for catalog endpoints.
//!
//! This module sends a single GET request, maps non-success statuses to
//! [`ClientError::Api`], and unwraps the `{ "data": ... }` envelope.
//!
//! # What this module does NOT handle:
//! - Retries or backoff (a failed request fails the call)
//! - Response caching

use std::sync::OnceLock;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ClientError, Result};
use crate::models::ApiResponse;

/// Process-wide default transport.
///
/// Created on first use and shared afterwards; `reqwest::Client` is a cheap
/// handle around a connection pool.
pub fn default_http_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(Client::new)
}

/// Send a GET to `url` and return the envelope's `data`.
///
/// `operation` names the resource in error messages ("materials", ...).
pub(crate) async fn fetch_data<T: DeserializeOwned>(
    client: &Client,
    url: Url,
    operation: &'static str,
) -> Result<T> {
    debug!(operation, url = %url, "Sending catalog request");

    let response = client.get(url.clone()).send().await?;
    let status = response.status();

    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        warn!(
            operation,
            status = status.as_u16(),
            url = %url,
            "Catalog request failed"
        );
        return Err(ClientError::Api {
            operation,
            status: status.as_u16(),
            status_text,
            url: url.to_string(),
        });
    }

    let body = response.bytes().await?;
    let envelope: ApiResponse<T> = serde_json::from_slice(&body)?;
    Ok(envelope.data)
}
