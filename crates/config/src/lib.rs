//! Configuration management for the catalog storefront.
//!
//! This crate provides types and loaders for the catalog service connection
//! settings, read from `.env` files, environment variables, and an optional
//! JSON configuration file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path, env_var_or_none};
pub use types::{Config, ConnectionConfig};
