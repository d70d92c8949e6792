//! Terminal rendering of display states.

use std::io::Write;
use std::sync::Mutex;
use urlcheck_core::presenter::{DisplayState, ResultPresenter, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Presenter that writes one line per display state to stdout and
/// remembers the last one for the exit status.
pub struct TerminalPresenter {
    format: OutputFormat,
    last: Mutex<Option<DisplayState>>,
}

impl TerminalPresenter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            last: Mutex::new(None),
        }
    }

    pub fn last(&self) -> Option<DisplayState> {
        self.last.lock().unwrap().clone()
    }
}

/// One output line for `state`, without the trailing newline.
pub fn render_line(state: &DisplayState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("[{:<8}] {}", state.status, state.message),
        OutputFormat::Json => serde_json::to_string(state)
            .unwrap_or_else(|_| format!("{{\"status\":\"{}\"}}", state.status)),
    }
}

impl ResultPresenter for TerminalPresenter {
    fn present(&self, message: &str, status: Status) {
        let state = DisplayState::new(message, status);
        let line = render_line(&state, self.format);
        *self.last.lock().unwrap() = Some(state);
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
            tracing::warn!("writing display state: {}", e);
        }
    }
}
