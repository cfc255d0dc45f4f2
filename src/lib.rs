//! # qmark-clone Library
//!
//! Clones the `Vgactec/qmark` repository with the system `git`, asking the
//! user before replacing a checkout that is already on disk.
//!
//! ## Quick Example
//!
//! ```
//! use qmark_clone::config::{CloneConfig, RepositoryRef};
//! use qmark_clone::prompt::is_affirmative;
//!
//! let config = CloneConfig::new(
//!     RepositoryRef::new("https://github.com/Vgactec/qmark.git", "qmark"),
//!     "/tmp/work",
//! );
//! assert!(config.destination_path().ends_with("qmark"));
//!
//! assert!(is_affirmative("Oui"));
//! assert!(!is_affirmative(""));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`, `defaults`)**: the fixed repository reference,
//!   passed into the orchestrator as an explicit value.
//! - **Git runner (`git`)**: the two process operations (version check,
//!   clone) behind the `GitRunner` trait.
//! - **Prompt (`prompt`)**: the overwrite confirmation behind the
//!   `ConfirmationProvider` trait.
//! - **Orchestrator (`orchestrator`)**: the sequential state machine that
//!   ties the pieces together and produces an `Outcome` with an exit code.

pub mod config;
pub mod defaults;
pub mod error;
pub mod git;
pub mod listing;
pub mod orchestrator;
pub mod output;
pub mod prompt;
