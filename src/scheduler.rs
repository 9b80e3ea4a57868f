//! Tick scheduler
//!
//! Owns a cancellation handle for every running interpolation driver so that
//! teardown is an explicit, enumerable operation instead of ambient global
//! timer state. `shutdown()` is the bulk-cancel: it closes every outstanding
//! handle at once, and must be called when the host tears the engine down.

use tokio_util::sync::CancellationToken;

/// Hands out per-driver cancellation handles and cancels them all on
/// shutdown.
#[derive(Debug)]
pub struct TickScheduler {
    root: CancellationToken,
}

impl TickScheduler {
    /// Create a scheduler with no outstanding handles.
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
        }
    }

    /// Register a new driver, returning its cancellation handle.
    ///
    /// The handle fires when `shutdown()` is called; cancelling the child
    /// alone stops only that driver.
    pub fn register(&self) -> CancellationToken {
        self.root.child_token()
    }

    /// Cancel every outstanding handle. Idempotent.
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    /// Whether the scheduler has been shut down.
    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}
