//! Client builder for constructing [`CatalogClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing and validating the base URL
//! - Building the underlying HTTP transport (timeout) unless one is supplied
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`crate::endpoints`])
//! - Loading configuration from the environment (handled by `scs-config`)
//!
//! # Invariants
//! - The base URL is always absolute http(s) with no trailing slash
//! - A caller-supplied `http_client` is used as-is; `timeout` is ignored then

use std::time::Duration;

use scs_config::Config;
use scs_config::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use url::Url;

use crate::client::CatalogClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`CatalogClient`].
///
/// ```rust,ignore
/// use scs_client::CatalogClient;
///
/// let client = CatalogClient::builder()
///     .base_url("https://app.sendcutsend.com")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct CatalogClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    http: Option<reqwest::Client>,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http: None,
        }
    }
}

impl CatalogClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the catalog service base URL. Defaults to the public service.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout of the transport built by [`Self::build`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use an existing transport instead of building one.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Take base URL and timeout from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Strip trailing slashes and check the URL is absolute http(s).
    fn normalize_base_url(url: &str) -> Result<String> {
        let trimmed = url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{}': {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "Base URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ClientError::InvalidUrl(format!(
                "Base URL has no host: {}",
                url
            )));
        }

        Ok(trimmed.to_string())
    }

    /// Build the [`CatalogClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for a malformed base URL and
    /// [`ClientError::Http`] if the transport fails to build.
    pub fn build(self) -> Result<CatalogClient> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Self::normalize_base_url(raw)?;

        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };

        Ok(CatalogClient { http, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults_to_public_service() {
        let client = CatalogClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_build_strips_trailing_slashes() {
        let client = CatalogClientBuilder::new()
            .base_url("http://localhost:3000//")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_build_rejects_non_http_scheme() {
        let err = CatalogClientBuilder::new()
            .base_url("ftp://files.example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_rejects_garbage() {
        let err = CatalogClientBuilder::new()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_config_copies_connection_settings() {
        let mut config = Config::with_base_url("https://staging.example.com");
        config.connection.timeout = Duration::from_secs(5);

        let builder = CatalogClientBuilder::new().from_config(&config);
        assert_eq!(
            builder.base_url.as_deref(),
            Some("https://staging.example.com")
        );
        assert_eq!(builder.timeout, Duration::from_secs(5));
    }
}
