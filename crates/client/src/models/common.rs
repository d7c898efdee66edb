//! Envelope and scalar models shared by all endpoints.

use serde::{Deserialize, Serialize};

/// The `{ "data": ... }` wrapper every catalog response uses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Payload of `GET /app_version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppVersion {
    pub version: String,
}
