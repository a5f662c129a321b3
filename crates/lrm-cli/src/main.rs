use clap::Parser;
use lrm_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    if cli.verbose {
        logging::init_logging_stderr(true);
    } else if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr(false);
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("lrm error: {:#}", err);
        std::process::exit(1);
    }
}
