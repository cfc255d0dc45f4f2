//! # Clone Orchestrator
//!
//! Drives one run of the tool as a strictly sequential state machine:
//!
//! ```text
//! START -> TOOL_CHECK -> DEST_CHECK -> CLONE -> SUCCESS
//!              |             |           |
//!         UNAVAILABLE   CANCELLED /  CLONE_FAILED
//!                       REMOVAL_FAILED
//! ```
//!
//! Every failure is terminal for the invocation; nothing is retried. All
//! status lines go to the writer passed to [`CloneOrchestrator::run`], and
//! the final [`Outcome`] carries the process exit code.
//!
//! The orchestrator never touches a process or stdin directly. It is
//! generic over a [`GitRunner`] and a [`ConfirmationProvider`], so the
//! same control flow runs against the real `git` and against fakes.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::config::CloneConfig;
use crate::error::{Error, Result};
use crate::git::{CloneOutput, GitRunner};
use crate::listing;
use crate::output::OutputConfig;
use crate::prompt::ConfirmationProvider;

/// Question asked when the destination already exists.
pub const OVERWRITE_PROMPT: &str = "Delete it and clone again?";

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    UserCancelled,
    ToolUnavailable,
    RemovalFailed,
    CloneFailed,
    Unexpected,
}

impl Outcome {
    /// `0` for [`Outcome::Success`], `1` for everything else.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            _ => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl From<&Error> for Outcome {
    fn from(error: &Error) -> Self {
        match error {
            Error::ToolUnavailable { .. } => Outcome::ToolUnavailable,
            Error::UserCancelled { .. } => Outcome::UserCancelled,
            Error::RemovalFailed { .. } => Outcome::RemovalFailed,
            Error::CloneFailed { .. } => Outcome::CloneFailed,
            Error::Spawn { .. } | Error::Prompt { .. } | Error::Io(_) => Outcome::Unexpected,
        }
    }
}

/// Runs the version check, destination reconciliation, clone and report.
pub struct CloneOrchestrator<G, P> {
    config: CloneConfig,
    git: G,
    prompt: P,
    output: OutputConfig,
}

impl<G, P> CloneOrchestrator<G, P>
where
    G: GitRunner,
    P: ConfirmationProvider,
{
    pub fn new(config: CloneConfig, git: G, prompt: P) -> Self {
        Self {
            config,
            git,
            prompt,
            output: OutputConfig::default(),
        }
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn config(&self) -> &CloneConfig {
        &self.config
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Execute the whole sequence and report the result to `out`.
    ///
    /// Failing to write the final report never changes the outcome; the
    /// write error is logged instead.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Outcome {
        match self.execute(out) {
            Ok(()) => {
                info!(
                    "Cloned {} into {}",
                    self.config.repository.url(),
                    self.config.repository.destination()
                );
                if let Err(e) = self.report_completion(out) {
                    warn!("Could not write the completion report: {}", e);
                }
                Outcome::Success
            }
            Err(error) => {
                let outcome = Outcome::from(&error);
                info!("Clone run ended with {:?}: {}", outcome, error);
                let report = self
                    .report_failure(&error, out)
                    .and_then(|()| writeln!(out, "\n=== Clone failed ===").map_err(Error::from));
                if let Err(e) = report {
                    warn!("Could not write the failure report ({}): {}", error, e);
                }
                outcome
            }
        }
    }

    fn execute<W: Write>(&mut self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "=== Cloning repository {} ===\n",
            self.config.repository.url()
        )?;

        self.tool_version()?;
        writeln!(
            out,
            "{} {} is available",
            self.output.ok_mark(),
            self.git.tool_name()
        )?;

        let working_dir = self.config.working_dir();
        let shown = working_dir
            .canonicalize()
            .unwrap_or_else(|_| working_dir.to_path_buf());
        writeln!(out, "Working directory: {}", shown.display())?;
        writeln!(out, "Cloning repository: {}", self.config.repository.url())?;

        self.reconcile_destination(out)?;

        let output = self.perform_clone()?;
        if !output.is_success() {
            return Err(Error::CloneFailed {
                url: self.config.repository.url().to_string(),
                code: output.code,
                stderr: output.stderr,
            });
        }

        self.report_success(out)
    }

    fn report_completion<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\n=== Clone completed successfully ===")?;
        writeln!(
            out,
            "You can now explore the project in the '{}' directory.",
            self.config.repository.destination()
        )?;
        Ok(())
    }

    fn tool_version(&self) -> Result<String> {
        let version = self.git.check_available()?;
        debug!("{} reports {}", self.git.tool_name(), version);
        Ok(version)
    }

    /// `true` when `<tool> --version` runs and exits successfully.
    ///
    /// A missing binary and a failing version check are both "unavailable";
    /// the difference only shows up in the debug log.
    pub fn check_tool_available(&self) -> bool {
        match self.tool_version() {
            Ok(_) => true,
            Err(e) => {
                debug!("Tool check failed: {}", e);
                false
            }
        }
    }

    /// Make sure the destination is absent before cloning.
    ///
    /// An existing destination is only removed after the user confirms.
    /// A refusal yields [`Error::UserCancelled`], a failed removal
    /// [`Error::RemovalFailed`]; neither is retried. A symbolic link is
    /// never followed or unlinked: it fails the removal.
    pub fn reconcile_destination<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let path = self.config.destination_path();
        let name = self.config.repository.destination().to_string();

        if !path.exists() {
            debug!("{} does not exist, nothing to remove", path.display());
            return Ok(());
        }

        writeln!(out, "Directory '{}' already exists.", name)?;
        out.flush()?;

        if !self.prompt.confirm(OVERWRITE_PROMPT)? {
            return Err(Error::UserCancelled { destination: name });
        }

        debug!("Removing {}", path.display());
        remove_tree(&path).map_err(|source| Error::RemovalFailed {
            path: path.clone(),
            source,
        })?;
        writeln!(out, "Directory '{}' removed.", name)?;
        Ok(())
    }

    /// Run the clone and hand back whatever the tool produced.
    ///
    /// A non-zero exit is not an error here; only a launch failure is.
    pub fn perform_clone(&self) -> Result<CloneOutput> {
        self.git
            .clone_repository(self.config.repository.url(), self.config.working_dir())
    }

    /// Print the success marker and the sorted top-level listing.
    ///
    /// A destination that is missing despite the successful clone just
    /// skips the listing.
    pub fn report_success<W: Write>(&self, out: &mut W) -> Result<()> {
        let name = self.config.repository.destination();
        writeln!(out, "{} Clone succeeded!", self.output.ok_mark())?;
        writeln!(out, "Repository cloned into directory: {}", name)?;

        match listing::sorted_entries(&self.config.destination_path())? {
            Some(entries) => {
                writeln!(out, "\nContents of '{}':", name)?;
                for entry in entries {
                    writeln!(out, "  - {}", entry)?;
                }
            }
            None => debug!("{} missing after clone, skipping listing", name),
        }
        Ok(())
    }

    /// Print the diagnostics collected by the step that failed.
    pub fn report_failure<W: Write>(&self, error: &Error, out: &mut W) -> Result<()> {
        let fail = self.output.fail_mark();
        match error {
            Error::ToolUnavailable { tool, reason } => {
                debug!("{} unavailable: {}", tool, reason);
                writeln!(out, "{} {} is not installed or not available in PATH", fail, tool)?;
                writeln!(out, "Please install {} before running this tool.", tool)?;
            }
            Error::UserCancelled { .. } => {
                writeln!(out, "Operation cancelled.")?;
            }
            Error::RemovalFailed { source, .. } => {
                writeln!(out, "Error while removing: {}", source)?;
            }
            Error::CloneFailed { code, stderr, .. } => {
                writeln!(out, "{} Clone failed:", fail)?;
                match code {
                    Some(code) => writeln!(out, "Exit code: {}", code)?,
                    None => writeln!(out, "Exit code: terminated by signal")?,
                }
                if !stderr.trim().is_empty() {
                    writeln!(out, "Error: {}", stderr.trim_end())?;
                }
            }
            other => {
                writeln!(out, "{} Unexpected error: {}", fail, other)?;
            }
        }
        Ok(())
    }
}

/// `remove_dir_all` that refuses to act on a symbolic link.
fn remove_tree(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.file_type().is_symlink() {
        return Err(io::Error::other("cannot remove a symbolic link to a directory"));
    }
    fs::remove_dir_all(path)
}
