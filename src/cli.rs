//! CLI argument parsing and run setup

use std::env;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use qmark_clone::config::{CloneConfig, RepositoryRef};
use qmark_clone::defaults::{DEFAULT_GIT_PROGRAM, GIT_PROGRAM_ENV};
use qmark_clone::git::SystemGit;
use qmark_clone::orchestrator::{CloneOrchestrator, Outcome};
use qmark_clone::output::OutputConfig;
use qmark_clone::prompt::StdinPrompt;

/// Clone the qmark repository into the current directory
#[derive(Parser, Debug)]
#[command(name = "qmark-clone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Colorize output (always, never, auto)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["always", "never", "auto"]
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,

    /// Version-control program to invoke
    #[arg(long, hide = true, env = GIT_PROGRAM_ENV, default_value = DEFAULT_GIT_PROGRAM)]
    git_program: String,
}

impl Cli {
    /// Run the clone and return its outcome
    pub fn execute(self) -> Result<Outcome> {
        init_logging(&self.log_level);

        let output = OutputConfig::from_env_and_flag(&self.color);
        console::set_colors_enabled(output.use_color);

        let working_dir = env::current_dir().context("Failed to determine working directory")?;
        let config = CloneConfig::new(RepositoryRef::default(), working_dir)
            .with_git_program(&self.git_program);
        debug!("Running with {:?}", config);

        let git = SystemGit::new(&config.git_program);
        let mut orchestrator =
            CloneOrchestrator::new(config, git, StdinPrompt::new()).with_output(output);

        Ok(orchestrator.run(&mut io::stdout()))
    }
}

/// `RUST_LOG` wins over `--log-level` when it is set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
