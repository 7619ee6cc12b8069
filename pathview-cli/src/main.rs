//! Main entry point for the pathview CLI.
//!
//! Commands:
//! - `normalize`: Print paths in canonical forward-slash form
//! - `equal`: Compare two paths under the platform rules
//! - `readable`: Print a path relative to a base directory
//! - `show-base`: Print the resolved default base directory
//! - `validate`: Validate a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records through the stderr logger
    let logger = pathview::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("WARN: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        platform: cli.platform,
    };

    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Equal(cmd) => cmd.execute(&global),
        cli::Command::Readable(cmd) => cmd.execute(&global),
        cli::Command::ShowBase(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
