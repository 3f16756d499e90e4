use headliner_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Failures are reported on stdout; the exit status stays 0.
    if let Err(err) = CliCommand::run_from_args() {
        tracing::error!("headliner error: {:#}", err);
        println!("An error occurred: {:#}", err);
    }
}
