//! Error types for the catalog client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during catalog client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The catalog service answered with a non-success status.
    ///
    /// 4xx and 5xx are reported the same way and never retried.
    #[error("Failed to fetch {operation}: {status} {status_text}")]
    Api {
        operation: &'static str,
        status: u16,
        status_text: String,
        url: String,
    },

    /// Transport failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The body was not valid JSON of the expected envelope shape.
    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The base URL could not be combined with an endpoint path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for network-level failures where no response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}
