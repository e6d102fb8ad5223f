//! Main entry point for the pathwalk CLI.
//!
//! A command-line front end over the pathwalk engine. Every subcommand is
//! a pure string operation: nothing here reads the filesystem, so paths
//! that do not exist are inspected just the same as ones that do.

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

    // Initialize logging based on verbosity
    let logger = pathwalk::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        style: cli.style.into(),
        logger,
    };
    global
        .logger
        .debug(&format!("parsing with {} style rules", global.style));

    // Execute the command
    let result = match cli.command {
        cli::Command::Basename(cmd) => cmd.execute(&global),
        cli::Command::Dirname(cmd) => cmd.execute(&global),
        cli::Command::Extension(cmd) => cmd.execute(&global),
        cli::Command::Name(cmd) => cmd.execute(&global),
        cli::Command::Root(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::SegmentAt(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Intersection(cmd) => cmd.execute(&global),
        cli::Command::Segments(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            global.logger.error(&format!("{e}"));
            std::process::exit(e.exit_code());
        }
    }
}
