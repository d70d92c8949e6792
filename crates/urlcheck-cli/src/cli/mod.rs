//! CLI host for the urlcheck widget.

mod commands;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use urlcheck_core::config;

use commands::{run_check, run_completions, run_validate, run_watch, WatchOptions};

/// Top-level CLI for urlcheck.
#[derive(Debug, Parser)]
#[command(name = "urlcheck")]
#[command(about = "urlcheck: validate URLs as you type and look them up", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check URL format only, without an existence lookup.
    Validate {
        /// One or more URLs (bare domains are treated as https).
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Validate a URL, then run one existence lookup and print the outcome.
    Check {
        url: String,
        /// Print display states as JSON lines.
        #[arg(long)]
        json: bool,
    },

    /// Read stdin line by line as successive values of the input field.
    Watch {
        /// Debounce delay in milliseconds (overrides config).
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
        /// Give up on an existence check after this many milliseconds.
        #[arg(long, value_name = "MS")]
        timeout_ms: Option<u64>,
        /// Let results of superseded checks overwrite the display.
        #[arg(long)]
        allow_stale: bool,
        /// Print display states as JSON lines.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Validate { urls } => run_validate(&urls),
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(())
            }
            CliCommand::Check { url, json } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_check(cfg, &url, json).await
            }
            CliCommand::Watch {
                delay_ms,
                timeout_ms,
                allow_stale,
                json,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let opts = WatchOptions {
                    delay_ms,
                    timeout_ms,
                    allow_stale,
                    json,
                };
                run_watch(cfg, opts).await
            }
        }
    }
}

#[cfg(test)]
mod tests;
