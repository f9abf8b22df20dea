//! dupcleaner - Interactive duplicate file cleaner
//!
//! Entry point for the dupcleaner CLI application.

use clap::Parser;
use dupcleaner::cli::Cli;
use dupcleaner::logging;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match dupcleaner::run_app(cli) {
        // Cancellation is a normal exit: the operator chose to stop.
        Ok(true) => println!("Canceled by user."),
        Ok(false) => {}
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
