//! Existence lookup for a validated URL.
//!
//! `ExistenceChecker` is the seam between the widget and whatever backend
//! answers "does this resource exist, and what is it". The bundled
//! [`StubChecker`] answers randomly after a random delay; callers must only
//! rely on the trait signature and the [`CheckResult`] shape.

mod stub;

pub use stub::StubChecker;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// What kind of resource lives at an existing URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Folder,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::File => write!(f, "file"),
            ResourceKind::Folder => write!(f, "folder"),
        }
    }
}

/// Outcome of an existence lookup. `kind` is set iff `exists` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    exists: bool,
    kind: Option<ResourceKind>,
}

impl CheckResult {
    /// The resource exists and is of the given kind.
    pub fn found(kind: ResourceKind) -> Self {
        Self {
            exists: true,
            kind: Some(kind),
        }
    }

    pub fn not_found() -> Self {
        Self {
            exists: false,
            kind: None,
        }
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn kind(&self) -> Option<ResourceKind> {
        self.kind
    }
}

/// Failure reported by an existence backend.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The backend could not answer (unreachable, bad response, etc.).
    #[error("existence backend failed: {0}")]
    Backend(String),
    /// The lookup did not resolve within the configured timeout.
    #[error("existence check timed out after {0:?}")]
    TimedOut(Duration),
}

/// Asynchronous existence lookup for a URL that already passed format validation.
#[async_trait]
pub trait ExistenceChecker: Send + Sync {
    async fn check_exists(&self, url: &str) -> Result<CheckResult, CheckError>;
}

/// Runs `checker` with an optional upper bound on how long it may take.
pub async fn check_with_timeout(
    checker: &dyn ExistenceChecker,
    url: &str,
    timeout: Option<Duration>,
) -> Result<CheckResult, CheckError> {
    match timeout {
        None => checker.check_exists(url).await,
        Some(limit) => tokio::time::timeout(limit, checker.check_exists(url))
            .await
            .map_err(|_| CheckError::TimedOut(limit))?,
    }
}
