//! Screen task scope.
//!
//! A screen that unmounts while a request is outstanding must discard the
//! response, not apply it to torn-down state. Instead of sprinkling "still
//! mounted" checks, every async completion runs through a scope: once the
//! scope is cancelled (or dropped), in-flight work resolves to `None` and
//! the stale result never reaches the caller.

use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Cancellation scope tied to one screen instance.
pub struct ScreenScope {
    token: CancellationToken,
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenScope {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Child scope cancelled along with this one
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Run a future to completion unless the scope is cancelled first.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            _ = self.token.cancelled() => None,
            value = fut => Some(value),
        }
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
