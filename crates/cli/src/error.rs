//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` and CLI-level errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see `cancellation`).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use scs_client::ClientError;
use thiserror::Error;

/// Structured exit codes for scs-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Network, timeout, DNS or base URL failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Unknown SKU or HTTP 404.
    NotFound = 4,

    /// The service answered with a body that could not be parsed.
    InvalidResponse = 5,

    /// HTTP 429 Too Many Requests.
    RateLimited = 7,

    /// HTTP 502, 503 or 504.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// True for conditions that may clear up on their own.
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            ExitCode::ConnectionError | ExitCode::RateLimited | ExitCode::ServiceUnavailable
        )
    }
}

/// Failures detected by the CLI itself rather than the client.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    NotFound(String),
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Api { status: 404, .. } => ExitCode::NotFound,
            ClientError::Api { status: 429, .. } => ExitCode::RateLimited,
            ClientError::Api {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::Api { .. } => ExitCode::GeneralError,

            ClientError::Http(e) if e.is_connect() || e.is_timeout() => ExitCode::ConnectionError,
            ClientError::Http(e) if e.is_decode() => ExitCode::InvalidResponse,
            ClientError::Http(_) => ExitCode::GeneralError,

            ClientError::Parse(_) => ExitCode::InvalidResponse,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::NotFound(_) => ExitCode::NotFound,
        }
    }
}

/// Extract an exit code from an `anyhow::Error`.
pub trait ExitCodeExt {
    /// Falls back to [`ExitCode::GeneralError`] when no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }
        ExitCode::GeneralError
    }
}
