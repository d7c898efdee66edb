//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `SCS_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Loading from the configuration file (see file.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_BASE_URL, ENV_CONFIG_PATH, ENV_TIMEOUT};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    Ok(())
}
