//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token passed through command handlers.
//! - Define the `Cancelled` marker error carried through `anyhow::Result`.
//! - Provide the `cancellable!` macro racing a future against the token.
//!
//! Does NOT handle:
//! - Installing signal handlers (see `main`).
//!
//! Invariants:
//! - Once cancelled, a token remains cancelled forever.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// concurrent `cancel()` cannot be missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error for user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

/// Await `$fut` unless `$cancel` fires first.
///
/// Evaluates to `anyhow::Result<T>`: the future's own error converted into
/// `anyhow::Error`, or [`Cancelled`] when the token wins.
macro_rules! cancellable {
    ($fut:expr, $cancel:expr) => {{
        tokio::select! {
            res = $fut => res.map_err(::anyhow::Error::from),
            _ = $cancel.cancelled() => Err(::anyhow::Error::new($crate::cancellation::Cancelled)),
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
        token.cancelled().await;
    }

    #[tokio::test]
    async fn test_cancellable_returns_cancelled_error() {
        let token = CancellationToken::new();
        token.cancel();
        let result: anyhow::Result<()> = cancellable!(
            std::future::pending::<Result<(), scs_client::ClientError>>(),
            token
        );
        let err = result.unwrap_err();
        assert!(is_cancelled_error(&err));
    }

    #[tokio::test]
    async fn test_cancellable_passes_through_value() {
        let token = CancellationToken::new();
        let result = cancellable!(async { Ok::<_, scs_client::ClientError>(42) }, token);
        assert_eq!(result.unwrap(), 42);
    }
}
