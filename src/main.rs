//! clear-project: interactive cleanup of recreatable Next.js project files
//!
//! Removes build output, dependency, cache, log, and editor-settings paths
//! from the current working directory after listing what exists and asking
//! for confirmation.

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use clear_project::cleaner::{Cleaner, RunStatus};
use clear_project::cli::CliArgs;
use clear_project::confirm::StdinConfirmer;
use clear_project::report::ConsoleReporter;

fn main() -> ExitCode {
    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("clear-project: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main execution logic
fn run() -> Result<RunStatus> {
    let _args = CliArgs::parse_args();

    // An interrupt while waiting at the prompt is a cancellation, not a
    // failure: exit 0 without removing anything.
    ctrlc::set_handler(|| {
        println!();
        println!("{}", "Operation cancelled by user.".blue());
        std::process::exit(0);
    })
    .context("failed to install interrupt handler")?;

    let base_dir = env::current_dir().context("cannot determine working directory")?;

    let reporter = ConsoleReporter;
    let confirmer = StdinConfirmer;
    Cleaner::new(base_dir, &reporter, &confirmer).run()
}
