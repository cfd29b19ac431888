//! Cooperative shutdown controller.
//!
//! `server::run` races this against OS signals; tests use it to stop a
//! server bound to an ephemeral port.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::Notify;

/// Cooperative shutdown signal shared by every clone.
#[derive(Clone, Debug, Default)]
pub struct ShutdownController {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    requested: AtomicBool,
    notify: Notify,
}

impl ShutdownController {
    /// Returns true once shutdown has been requested.
    pub fn is_requested(&self) -> bool {
        self.inner.requested.load(Ordering::Acquire)
    }

    /// Request shutdown and wake all waiters. Repeated calls are no-ops.
    pub fn request(&self) {
        if !self.inner.requested.swap(true, Ordering::AcqRel) {
            self.inner.notify.notify_waiters();
        }
    }

    /// Wait until shutdown is requested.
    pub async fn wait(&self) {
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        // Register before checking the flag so a concurrent request() is not missed
        notified.as_mut().enable();
        if self.is_requested() {
            return;
        }
        notified.await;
    }
}
