use wheelhouse_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; a broken state dir must not stop the run.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {err:#}");
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        tracing::error!("{err:#}");
        eprintln!("wheelhouse error: {:#}", err);
        std::process::exit(1);
    }
}
