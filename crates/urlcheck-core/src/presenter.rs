//! Output side of the widget: a sink for `(message, status)` pairs.

use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

/// Presentation class of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Invalid,
    Checking,
    Valid,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Status::Invalid => "invalid",
            Status::Checking => "checking",
            Status::Valid => "valid",
        };
        f.pad(tag)
    }
}

/// The only externally observable output of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub message: String,
    pub status: Status,
}

impl DisplayState {
    pub fn new(message: impl Into<String>, status: Status) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

/// Writes a message and its status tag to wherever the host renders output.
pub trait ResultPresenter: Send + Sync {
    fn present(&self, message: &str, status: Status);
}

/// Presenter that keeps every state it was given, in order.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    history: Mutex<Vec<DisplayState>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state currently on display, if anything was presented yet.
    pub fn current(&self) -> Option<DisplayState> {
        self.history.lock().unwrap().last().cloned()
    }

    pub fn history(&self) -> Vec<DisplayState> {
        self.history.lock().unwrap().clone()
    }
}

impl ResultPresenter for RecordingPresenter {
    fn present(&self, message: &str, status: Status) {
        self.history
            .lock()
            .unwrap()
            .push(DisplayState::new(message, status));
    }
}
