//! Configuration types for the catalog storefront.
//!
//! Responsibilities:
//! - Define connection settings for the catalog service (base URL, timeout).
//! - Define the on-disk JSON shape of the optional configuration file.
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - `Config::default()` targets the public catalog service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the catalog service (e.g., https://app.sendcutsend.com)
    pub base_url: String,
    /// Request timeout applied to the HTTP transport (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
}

impl Config {
    /// Create a config pointing at a specific base URL with default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: base_url.into(),
                ..ConnectionConfig::default()
            },
        }
    }
}

/// Shape of the optional JSON configuration file.
///
/// Every field is optional; absent fields fall through to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}
