use docsum_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; if the state dir is
    // unwritable, keep going with stderr-only logging.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("docsum error: {:#}", err);
        std::process::exit(1);
    }
}
