//! Configuration file loading.
//!
//! Responsibilities:
//! - Resolve the configuration file location (explicit path or platform default).
//! - Parse the JSON file and apply its values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Writing configuration back to disk.
//!
//! Invariants:
//! - A missing file at the default location is not an error.
//! - An unresolvable default location (no home directory) is treated like a missing file.
//! - A missing file at an explicitly requested location is an error.
//! - File values never replace values already set from the environment or overrides.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::types::ConfigFile;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/scs-storefront/config.json`
/// - macOS: `~/Library/Application Support/scs-storefront/config.json`
/// - Windows: `%AppData%\scs-storefront\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for this user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Apply values from the configuration file to the loader.
pub fn apply_config_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let Some((path, explicit)) = resolve_config_path(loader.config_path(), default_config_path)?
    else {
        return Ok(());
    };

    if !path.exists() {
        if explicit {
            return Err(ConfigError::ConfigFileNotFound { path });
        }
        debug!(path = %path.display(), "No config file at default location");
        return Ok(());
    }

    let file = read_config_file(&path)?;
    debug!(path = %path.display(), "Loaded config file");

    if loader.base_url().is_none() {
        loader.set_base_url(file.base_url);
    }
    if loader.timeout().is_none() {
        loader.set_timeout(file.timeout_seconds.map(Duration::from_secs));
    }
    Ok(())
}

/// Pick the file to read: the explicit path, else the platform default.
///
/// Returns `None` when there is no explicit path and the default location
/// cannot be determined.
pub(crate) fn resolve_config_path(
    explicit: Option<&PathBuf>,
    default_path: impl FnOnce() -> Result<PathBuf, ConfigError>,
) -> Result<Option<(PathBuf, bool)>, ConfigError> {
    if let Some(path) = explicit {
        return Ok(Some((path.clone(), true)));
    }
    match default_path() {
        Ok(path) => Ok(Some((path, false))),
        Err(ConfigError::ConfigDirUnavailable(reason)) => {
            debug!(%reason, "No default config location, skipping config file");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn read_config_file(path: &PathBuf) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.clone(),
        source,
    })
}
