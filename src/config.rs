//! # Clone Configuration
//!
//! Explicit configuration handed to the orchestrator. The binary builds a
//! [`CloneConfig`] from the built-in defaults (plus the git program
//! override); tests build their own against temporary directories.

use std::path::{Path, PathBuf};

use crate::defaults::{DEFAULT_DESTINATION, DEFAULT_GIT_PROGRAM, DEFAULT_REPO_URL};

/// An immutable (source URL, local destination name) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    url: String,
    destination: String,
}

impl RepositoryRef {
    pub fn new(url: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            destination: destination.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Name of the directory the clone is expected to produce.
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl Default for RepositoryRef {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_URL, DEFAULT_DESTINATION)
    }
}

/// Everything the orchestrator needs to know about a run.
#[derive(Debug, Clone)]
pub struct CloneConfig {
    pub repository: RepositoryRef,
    /// Program used for `--version` and `clone`.
    pub git_program: String,
    /// Directory the clone runs in; the destination is resolved against it.
    pub working_dir: PathBuf,
}

impl CloneConfig {
    pub fn new(repository: RepositoryRef, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            repository,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            working_dir: working_dir.into(),
        }
    }

    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    /// Full path of the destination directory.
    pub fn destination_path(&self) -> PathBuf {
        self.working_dir.join(self.repository.destination())
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self::new(RepositoryRef::default(), ".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtin_repository() {
        let config = CloneConfig::default();
        assert_eq!(config.repository.url(), DEFAULT_REPO_URL);
        assert_eq!(config.repository.destination(), DEFAULT_DESTINATION);
        assert_eq!(config.git_program, "git");
        assert_eq!(config.working_dir(), Path::new("."));
    }

    #[test]
    fn test_destination_path_is_relative_to_working_dir() {
        let config = CloneConfig::new(
            RepositoryRef::new("https://example.com/demo.git", "demo"),
            "/tmp/work",
        );
        assert_eq!(config.destination_path(), PathBuf::from("/tmp/work/demo"));
    }

    #[test]
    fn test_with_git_program_overrides_default() {
        let config = CloneConfig::default().with_git_program("/opt/git/bin/git");
        assert_eq!(config.git_program, "/opt/git/bin/git");
    }
}
