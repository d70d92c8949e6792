//! Deterministic existence checker for integration tests.
//!
//! Each URL gets a scripted latency and answer; every call is logged so tests
//! can assert which URLs were actually checked.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use urlcheck_core::existence::{CheckError, CheckResult, ExistenceChecker};

#[derive(Debug, Clone, Copy)]
pub enum Answer {
    Result(CheckResult),
    Fail,
}

#[derive(Debug, Default)]
pub struct ScriptedChecker {
    script: HashMap<String, (Duration, Answer)>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, url: &str, delay: Duration, answer: Answer) -> Self {
        self.script.insert(url.to_string(), (delay, answer));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExistenceChecker for ScriptedChecker {
    async fn check_exists(&self, url: &str) -> Result<CheckResult, CheckError> {
        self.calls.lock().unwrap().push(url.to_string());
        let (delay, answer) = self
            .script
            .get(url)
            .copied()
            .unwrap_or((Duration::ZERO, Answer::Result(CheckResult::not_found())));
        tokio::time::sleep(delay).await;
        match answer {
            Answer::Result(r) => Ok(r),
            Answer::Fail => Err(CheckError::Backend(format!("scripted failure for {url}"))),
        }
    }
}
