//! The widget controller: one check session per input change.
//!
//! Input is validated synchronously. Well-formed input arms the debounce
//! gate; when the gate fires, "Checking URL..." is shown and the existence
//! check runs in its own task. A started check is never aborted by later
//! input. Whether its result may still reach the display is governed by
//! `discard_stale_results`: when set, every input bumps a request generation
//! and only a check carrying the current generation may write.

use crate::config::UrlCheckConfig;
use crate::debounce::DebounceGate;
use crate::error::InputError;
use crate::existence::{check_with_timeout, CheckError, CheckResult, ExistenceChecker};
use crate::presenter::{ResultPresenter, Status};
use crate::url_model;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::Notify;

pub const CHECKING_MESSAGE: &str = "Checking URL...";

/// State shared between the controller and its timer/check tasks.
struct Shared {
    checker: Arc<dyn ExistenceChecker>,
    presenter: Arc<dyn ResultPresenter>,
    /// Current request generation. Held across every display write so a
    /// superseded check cannot write after a newer input was shown.
    generation: Mutex<u64>,
    discard_stale: bool,
    timeout: Option<Duration>,
    in_flight: AtomicUsize,
    idle: Notify,
}

/// Decrements the in-flight count when a check task ends, however it ends.
struct InFlightGuard(Arc<Shared>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.0.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.0.idle.notify_one();
        }
    }
}

impl Shared {
    fn lock_generation(&self) -> MutexGuard<'_, u64> {
        self.generation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Bumps the generation and returns the new value with the lock still held.
    fn next_generation(&self) -> (MutexGuard<'_, u64>, u64) {
        let mut current = self.lock_generation();
        *current += 1;
        let generation = *current;
        (current, generation)
    }

    /// Presents `message` unless `generation` was superseded.
    /// Returns false when the write was dropped.
    fn show_if_current(&self, generation: u64, message: &str, status: Status) -> bool {
        let current = self.lock_generation();
        if self.discard_stale && *current != generation {
            return false;
        }
        self.presenter.present(message, status);
        true
    }

    /// Runs when the debounce timer expires.
    fn start_check(self: Arc<Self>, url: String, generation: u64) {
        if !self.show_if_current(generation, CHECKING_MESSAGE, Status::Checking) {
            tracing::debug!(url = %url, generation, "skipping superseded check");
            return;
        }
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let guard = InFlightGuard(Arc::clone(&self));
        tokio::spawn(async move {
            let outcome = check_with_timeout(self.checker.as_ref(), &url, self.timeout).await;
            self.finish(&url, generation, outcome);
            drop(guard);
        });
    }

    fn finish(&self, url: &str, generation: u64, outcome: Result<CheckResult, CheckError>) {
        let (message, status) = match outcome {
            Ok(result) => match result.kind() {
                Some(kind) if result.exists() => {
                    (format!("URL exists! Type: {}", kind), Status::Valid)
                }
                _ => (InputError::NotFound.to_string(), Status::Invalid),
            },
            Err(e) => {
                tracing::warn!(url, "existence check failed: {}", e);
                (InputError::CheckFailed.to_string(), Status::Invalid)
            }
        };
        if self.show_if_current(generation, &message, status) {
            tracing::info!(url, %status, "{}", message);
        } else {
            tracing::debug!(url, generation, "discarding stale check result");
        }
    }
}

/// URL input widget core. Create one per input control; feed it every
/// change with [`UrlChecker::handle_input`]. Must live inside a tokio runtime.
/// The presenter is called with an internal lock held and must not call back
/// into the widget.
pub struct UrlChecker {
    gate: DebounceGate,
    delay: Duration,
    shared: Arc<Shared>,
}

impl UrlChecker {
    pub fn new(
        cfg: &UrlCheckConfig,
        checker: Arc<dyn ExistenceChecker>,
        presenter: Arc<dyn ResultPresenter>,
    ) -> Self {
        Self {
            gate: DebounceGate::new(),
            delay: cfg.debounce_delay(),
            shared: Arc::new(Shared {
                checker,
                presenter,
                generation: Mutex::new(0),
                discard_stale: cfg.discard_stale_results,
                timeout: cfg.check_timeout(),
                in_flight: AtomicUsize::new(0),
                idle: Notify::new(),
            }),
        }
    }

    /// Starts a new check session for the input control's current value.
    pub fn handle_input(&mut self, raw: &str) {
        let (current, generation) = self.shared.next_generation();
        self.gate.cancel();

        match url_model::check_format(raw) {
            Err(err) => {
                tracing::debug!(input = raw, "rejected: {}", err);
                self.shared.presenter.present(&err.to_string(), Status::Invalid);
            }
            Ok(url) => {
                drop(current);
                let shared = Arc::clone(&self.shared);
                self.gate.schedule(url, self.delay, move |url| {
                    shared.start_check(url, generation)
                });
            }
        }
    }

    /// Tears down the current session: the pending timer is cancelled and,
    /// when stale results are discarded, in-flight checks can no longer display.
    pub fn cancel(&mut self) {
        drop(self.shared.next_generation());
        self.gate.cancel();
    }

    /// True while a debounce timer is armed or a check has not resolved.
    pub fn is_busy(&self) -> bool {
        self.gate.is_pending() || self.shared.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Waits until the pending timer has fired and every started check resolved.
    pub async fn wait_idle(&mut self) {
        self.gate.flush().await;
        while self.shared.in_flight.load(Ordering::SeqCst) > 0 {
            self.shared.idle.notified().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::existence::ResourceKind;
    use crate::presenter::{DisplayState, RecordingPresenter};
    use async_trait::async_trait;

    struct Failing;

    #[async_trait]
    impl ExistenceChecker for Failing {
        async fn check_exists(&self, _url: &str) -> Result<CheckResult, CheckError> {
            Err(CheckError::Backend("connection refused".into()))
        }
    }

    struct Always(CheckResult);

    #[async_trait]
    impl ExistenceChecker for Always {
        async fn check_exists(&self, _url: &str) -> Result<CheckResult, CheckError> {
            Ok(self.0)
        }
    }

    fn widget(checker: Arc<dyn ExistenceChecker>) -> (UrlChecker, Arc<RecordingPresenter>) {
        let presenter = Arc::new(RecordingPresenter::new());
        let w = UrlChecker::new(&UrlCheckConfig::default(), checker, presenter.clone());
        (w, presenter)
    }

    #[tokio::test(start_paused = true)]
    async fn empty_and_malformed_input() {
        let (mut w, p) = widget(Arc::new(Always(CheckResult::not_found())));
        w.handle_input("   ");
        assert_eq!(
            p.current(),
            Some(DisplayState::new("Please enter a URL", Status::Invalid))
        );
        w.handle_input("not a url");
        assert_eq!(
            p.current(),
            Some(DisplayState::new("Invalid URL format", Status::Invalid))
        );
        assert!(!w.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn found_folder() {
        let (mut w, p) = widget(Arc::new(Always(CheckResult::found(ResourceKind::Folder))));
        w.handle_input("example.com/docs");
        assert!(w.is_busy());
        w.wait_idle().await;
        assert_eq!(
            p.history(),
            vec![
                DisplayState::new(CHECKING_MESSAGE, Status::Checking),
                DisplayState::new("URL exists! Type: folder", Status::Valid),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn not_found() {
        let (mut w, p) = widget(Arc::new(Always(CheckResult::not_found())));
        w.handle_input("example.com");
        w.wait_idle().await;
        assert_eq!(
            p.current(),
            Some(DisplayState::new("URL does not exist", Status::Invalid))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn checker_failure() {
        let (mut w, p) = widget(Arc::new(Failing));
        w.handle_input("example.com");
        w.wait_idle().await;
        assert_eq!(
            p.current(),
            Some(DisplayState::new("Error checking URL", Status::Invalid))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_input_cancels_pending_check() {
        let (mut w, p) = widget(Arc::new(Always(CheckResult::found(ResourceKind::File))));
        w.handle_input("example.com");
        tokio::time::sleep(Duration::from_millis(100)).await;
        w.handle_input("example.com/<");
        w.wait_idle().await;
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(
            p.history(),
            vec![DisplayState::new("Invalid URL format", Status::Invalid)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending() {
        let (mut w, p) = widget(Arc::new(Always(CheckResult::found(ResourceKind::File))));
        w.handle_input("example.com");
        w.cancel();
        w.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(p.history().is_empty());
        assert!(!w.is_busy());
    }

    /// Presenter that parks the writer inside the first "URL exists!" write
    /// until the test releases it.
    struct ParkingPresenter {
        inner: RecordingPresenter,
        entered: std::sync::mpsc::SyncSender<()>,
        release: Mutex<std::sync::mpsc::Receiver<()>>,
    }

    impl ResultPresenter for ParkingPresenter {
        fn present(&self, message: &str, status: Status) {
            if status == Status::Valid {
                let _ = self.entered.send(());
                let _ = self
                    .release
                    .lock()
                    .unwrap()
                    .recv_timeout(std::time::Duration::from_secs(5));
            }
            self.inner.present(message, status);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn newer_input_always_lands_after_parked_result() {
        let (entered_tx, entered_rx) = std::sync::mpsc::sync_channel(1);
        let (release_tx, release_rx) = std::sync::mpsc::channel();
        let presenter = Arc::new(ParkingPresenter {
            inner: RecordingPresenter::new(),
            entered: entered_tx,
            release: Mutex::new(release_rx),
        });
        let cfg = UrlCheckConfig {
            debounce_ms: 10,
            ..UrlCheckConfig::default()
        };
        let mut w = UrlChecker::new(
            &cfg,
            Arc::new(Always(CheckResult::found(ResourceKind::File))),
            presenter.clone(),
        );

        w.handle_input("example.com");
        entered_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("check result never reached the presenter");

        // The result write is parked on a worker; type a malformed value from
        // another thread, then let the parked write go.
        std::thread::scope(|scope| {
            let typing = scope.spawn(|| w.handle_input("example.com/<bad>"));
            std::thread::sleep(std::time::Duration::from_millis(50));
            release_tx.send(()).unwrap();
            typing.join().unwrap();
        });
        w.wait_idle().await;

        let history = presenter.inner.history();
        assert_eq!(
            history.last(),
            Some(&DisplayState::new("Invalid URL format", Status::Invalid))
        );
        assert_eq!(
            history,
            vec![
                DisplayState::new(CHECKING_MESSAGE, Status::Checking),
                DisplayState::new("URL exists! Type: file", Status::Valid),
                DisplayState::new("Invalid URL format", Status::Invalid),
            ]
        );
    }
}
