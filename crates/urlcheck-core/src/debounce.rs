//! Debounce gate: at most one delayed action pending at a time.
//!
//! Each `schedule` aborts the previously armed timer (if it has not fired)
//! and arms a new one. Superseded actions are dropped, never queued, so a
//! burst of calls closer together than the delay fires only the last one.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Quiet period used when the host does not configure one.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Holds the single pending timer. Must be used from inside a tokio runtime.
/// Dropping the gate cancels whatever is pending.
#[derive(Debug, Default)]
pub struct DebounceGate {
    pending: Option<JoinHandle<()>>,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending action and arms `action(url)` to run once after `delay`.
    pub fn schedule<F>(&mut self, url: impl Into<String>, delay: Duration, action: F)
    where
        F: FnOnce(String) + Send + 'static,
    {
        self.cancel();
        let url = url.into();
        tracing::debug!(url = %url, delay_ms = delay.as_millis() as u64, "debounce armed");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action(url);
        }));
    }

    /// Aborts the pending action. No-op if nothing is pending or it already fired.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                tracing::debug!("debounce superseded");
            }
            handle.abort();
        }
    }

    /// True while a timer is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Waits for the pending action (if any) to fire and run.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    tracing::warn!("debounced action panicked: {}", e);
                }
            }
        }
    }
}

impl Drop for DebounceGate {
    fn drop(&mut self) {
        self.cancel();
    }
}
