//! # Error Handling
//!
//! Centralized error type for `qmark-clone`, built with `thiserror`.
//!
//! Every variant maps onto one terminal [`crate::orchestrator::Outcome`]:
//!
//! - `ToolUnavailable`: git is missing or its version check failed.
//! - `UserCancelled`: the user declined to replace an existing checkout.
//! - `RemovalFailed`: the stale checkout could not be deleted.
//! - `CloneFailed`: `git clone` exited with a non-zero status.
//! - `Spawn`, `Prompt`, `Io`: anything else, reported as unexpected.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for qmark-clone operations
#[derive(Error, Debug)]
pub enum Error {
    /// The version-control tool could not be run or reported a failure.
    #[error("{tool} is not available: {reason}")]
    ToolUnavailable { tool: String, reason: String },

    /// The user answered anything but yes to the overwrite prompt.
    #[error("Operation cancelled: '{destination}' was left untouched")]
    UserCancelled { destination: String },

    /// Deleting the existing destination failed.
    #[error("Failed to remove {}: {source}", path.display())]
    RemovalFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `git clone` ran and exited non-zero.
    #[error("Clone of {url} failed with exit code {}{}", code_text(*code), stderr_suffix(stderr))]
    CloneFailed {
        url: String,
        code: Option<i32>,
        stderr: String,
    },

    /// A child process could not be started at all.
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the user's answer failed.
    #[error("Prompt error: {message}")]
    Prompt { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn code_text(code: Option<i32>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "unknown".to_string())
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim_end();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
