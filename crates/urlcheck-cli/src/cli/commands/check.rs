//! `urlcheck check <url>` – one session with no debounce.

use anyhow::Result;
use std::sync::Arc;
use urlcheck_core::config::UrlCheckConfig;
use urlcheck_core::existence::StubChecker;
use urlcheck_core::presenter::{DisplayState, Status};
use urlcheck_core::UrlChecker;

use crate::cli::terminal::{OutputFormat, TerminalPresenter};

/// Runs one session; fails unless the URL ends up `Valid`.
pub async fn run_check(mut cfg: UrlCheckConfig, url: &str, json: bool) -> Result<()> {
    cfg.debounce_ms = 0;
    cfg.validate()?;

    let checker = Arc::new(StubChecker::from_config(&cfg.stub));
    let presenter = Arc::new(TerminalPresenter::new(OutputFormat::from_json_flag(json)));
    let mut widget = UrlChecker::new(&cfg, checker, presenter.clone());

    widget.handle_input(url);
    widget.wait_idle().await;
    ensure_valid(url, presenter.last())
}

fn ensure_valid(url: &str, last: Option<DisplayState>) -> Result<()> {
    match last {
        Some(state) if state.status == Status::Valid => Ok(()),
        Some(state) => anyhow::bail!("{}: {}", url.trim(), state.message),
        None => anyhow::bail!("{}: no result", url.trim()),
    }
}
