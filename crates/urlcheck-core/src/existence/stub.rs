//! Randomized stand-in for a real existence backend.

use super::{CheckError, CheckResult, ExistenceChecker, ResourceKind};
use crate::config::StubConfig;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Answers after a uniform random delay in `[min_delay, max_delay)`.
/// `exists` is drawn with `exists_probability`; an existing resource is a
/// file with `file_probability`, otherwise a folder.
#[derive(Debug, Clone)]
pub struct StubChecker {
    min_delay: Duration,
    max_delay: Duration,
    exists_probability: f64,
    file_probability: f64,
}

impl Default for StubChecker {
    fn default() -> Self {
        Self::from_config(&StubConfig::default())
    }
}

impl StubChecker {
    pub fn from_config(cfg: &StubConfig) -> Self {
        Self {
            min_delay: Duration::from_millis(cfg.min_delay_ms),
            max_delay: Duration::from_millis(cfg.max_delay_ms),
            exists_probability: cfg.exists_probability.clamp(0.0, 1.0),
            file_probability: cfg.file_probability.clamp(0.0, 1.0),
        }
    }

    fn roll(&self) -> (Duration, CheckResult) {
        let mut rng = rand::thread_rng();
        let delay = if self.max_delay > self.min_delay {
            rng.gen_range(self.min_delay..self.max_delay)
        } else {
            self.min_delay
        };
        let result = if rng.gen_bool(self.exists_probability) {
            let kind = if rng.gen_bool(self.file_probability) {
                ResourceKind::File
            } else {
                ResourceKind::Folder
            };
            CheckResult::found(kind)
        } else {
            CheckResult::not_found()
        };
        (delay, result)
    }
}

#[async_trait]
impl ExistenceChecker for StubChecker {
    async fn check_exists(&self, url: &str) -> Result<CheckResult, CheckError> {
        let (delay, result) = self.roll();
        tracing::debug!(url, delay_ms = delay.as_millis() as u64, "stub existence check");
        tokio::time::sleep(delay).await;
        Ok(result)
    }
}
