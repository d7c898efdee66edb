//! Centralized constants for the storefront workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Catalog Service Defaults
// =============================================================================

/// Base address of the public catalog service.
pub const DEFAULT_BASE_URL: &str = "https://app.sendcutsend.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// Environment & Files
// =============================================================================

/// Environment variable overriding the catalog base URL.
pub const ENV_BASE_URL: &str = "SCS_BASE_URL";

/// Environment variable overriding the request timeout (seconds).
pub const ENV_TIMEOUT: &str = "SCS_TIMEOUT";

/// Environment variable pointing at a JSON configuration file.
pub const ENV_CONFIG_PATH: &str = "SCS_CONFIG_PATH";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Application name used for the platform config directory.
pub const APP_DIR_NAME: &str = "scs-storefront";

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";
