//! # qmark-clone CLI
//!
//! Binary entry point for the `qmark-clone` command-line tool.
//!
//! It parses the (ambient-only) flags with `clap`, sets up logging and
//! colors, runs the orchestrator from the library crate against the real
//! `git` and stdin, and turns the outcome into the process exit code.

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    let outcome = cli.execute()?;
    Ok(ExitCode::from(outcome.exit_code()))
}
