//! # Git Process Runner
//!
//! The orchestrator never spawns processes itself. It talks to a
//! [`GitRunner`], which has exactly two operations: the availability check
//! and the clone. [`SystemGit`] implements them with the system `git`
//! binary, so SSH keys, credential helpers and `~/.gitconfig` apply as
//! they would on the command line.

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use log::debug;

use crate::error::{Error, Result};

/// Captured result of a finished `git clone` process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CloneOutput {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    fn from_output(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// The two process-level operations the orchestrator depends on.
pub trait GitRunner {
    /// Name shown in status lines (`git`, or the override path).
    fn tool_name(&self) -> &str;

    /// Run `<tool> --version`.
    ///
    /// Returns the first line of the version output on success. A launch
    /// failure and a non-zero exit both come back as
    /// [`Error::ToolUnavailable`], with the reason telling them apart.
    fn check_available(&self) -> Result<String>;

    /// Run `<tool> clone <url>` inside `working_dir` and wait for it.
    ///
    /// A non-zero exit is reported through [`CloneOutput::code`], not as
    /// an error. `Err` means the process could not be started.
    fn clone_repository(&self, url: &str, working_dir: &Path) -> Result<CloneOutput>;
}

/// [`GitRunner`] backed by a real executable.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl GitRunner for SystemGit {
    fn tool_name(&self) -> &str {
        &self.program
    }

    fn check_available(&self) -> Result<String> {
        debug!("Running {} --version", self.program);
        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .map_err(|e| Error::ToolUnavailable {
                tool: self.program.clone(),
                reason: launch_failure_reason(&e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::ToolUnavailable {
                tool: self.program.clone(),
                reason: format!(
                    "version check exited with {}{}",
                    output.status,
                    if stderr.trim().is_empty() {
                        String::new()
                    } else {
                        format!(": {}", stderr.trim())
                    }
                ),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = stdout.lines().next().unwrap_or_default().trim().to_string();
        debug!("Detected {}", version);
        Ok(version)
    }

    fn clone_repository(&self, url: &str, working_dir: &Path) -> Result<CloneOutput> {
        debug!(
            "Running {} clone {} in {}",
            self.program,
            url,
            working_dir.display()
        );
        let output = Command::new(&self.program)
            .args(["clone", url])
            .current_dir(working_dir)
            .output()
            .map_err(|e| Error::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        let result = CloneOutput::from_output(output);
        debug!("{} clone exited with {:?}", self.program, result.code);
        Ok(result)
    }
}

fn launch_failure_reason(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "not found in PATH".to_string(),
        io::ErrorKind::PermissionDenied => "not executable".to_string(),
        _ => format!("could not be launched: {}", err),
    }
}
