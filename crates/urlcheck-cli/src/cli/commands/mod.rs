//! CLI command handlers, one file per subcommand.

mod check;
mod completions;
mod validate;
mod watch;

pub use check::run_check;
pub use completions::run_completions;
pub use validate::run_validate;
pub use watch::{run_watch, WatchOptions};
