//! polymer-config: inspect and validate polymer.json project configuration.
//!
//! This is the main entry point for the `polymer-config` CLI. It parses
//! arguments, dispatches to the command handler, and maps errors to exit
//! codes.

use polymer_project_config::cli::Cli;
use polymer_project_config::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", err);
    }

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
