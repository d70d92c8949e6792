use urlcheck_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; falls back to stderr.
    let log_target = logging::init();
    tracing::debug!("logging to {}", log_target);

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("urlcheck error: {:#}", err);
        if log_target != logging::LogTarget::Stderr {
            eprintln!("details in {}", log_target);
        }
        std::process::exit(1);
    }
}
