//! `urlcheck watch` – drive the widget from stdin, one line per input change.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use urlcheck_core::config::UrlCheckConfig;
use urlcheck_core::existence::StubChecker;
use urlcheck_core::UrlChecker;

use crate::cli::terminal::{OutputFormat, TerminalPresenter};

/// Command-line overrides for the watch loop.
#[derive(Debug, Clone, Default)]
pub struct WatchOptions {
    pub delay_ms: Option<u64>,
    pub timeout_ms: Option<u64>,
    pub allow_stale: bool,
    pub json: bool,
}

impl WatchOptions {
    /// Applies the flags on top of the file configuration.
    pub fn apply(&self, mut cfg: UrlCheckConfig) -> Result<UrlCheckConfig> {
        if let Some(ms) = self.delay_ms {
            cfg.debounce_ms = ms;
        }
        if self.timeout_ms.is_some() {
            cfg.check_timeout_ms = self.timeout_ms;
        }
        if self.allow_stale {
            cfg.discard_stale_results = false;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

pub async fn run_watch(cfg: UrlCheckConfig, opts: WatchOptions) -> Result<()> {
    let cfg = opts.apply(cfg)?;
    tracing::info!(
        debounce_ms = cfg.debounce_ms,
        discard_stale = cfg.discard_stale_results,
        "watching stdin"
    );

    let checker = Arc::new(StubChecker::from_config(&cfg.stub));
    let presenter = Arc::new(TerminalPresenter::new(OutputFormat::from_json_flag(opts.json)));
    let mut widget = UrlChecker::new(&cfg, checker, presenter);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        widget.handle_input(&line);
    }

    // EOF: let the last session finish before exiting.
    widget.wait_idle().await;
    Ok(())
}
