//! Shared test utilities for E2E tests.
//!
//! The binary is pointed at a fake `git` shell script through the
//! `QMARK_CLONE_GIT` environment variable, so no test touches the network
//! unless it is gated behind the `integration-tests` feature.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_git(fake_git::CLONES);
//!     fixture.command().assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;
    pub use serial_test::serial;

    #[allow(unused_imports)]
    pub use super::fake_git;
    #[allow(unused_imports)]
    pub use super::should_skip_network_tests;
    pub use super::TestFixture;
}

/// Bodies for the fake `git` script. `$1` is the subcommand, `$2` the URL.
#[allow(dead_code)]
pub mod fake_git {
    /// Answers `--version` and clones into the URL's basename.
    pub const CLONES: &str = r#"
case "$1" in
  --version) echo "git version 2.43.0" ;;
  clone)
    name=$(basename "$2" .git)
    mkdir "$name" && mkdir "$name/src"
    touch "$name/README.md" "$name/Cargo.toml" "$name/package.json"
    echo "Cloning into '$name'..." >&2
    ;;
esac
"#;

    /// Version check works, clone fails like an unreachable remote.
    pub const CLONE_FAILS: &str = r#"
case "$1" in
  --version) echo "git version 2.43.0" ;;
  clone)
    echo "fatal: unable to access '$2': Could not resolve host" >&2
    exit 128
    ;;
esac
"#;

    /// Exists on disk but the version check itself fails.
    pub const BROKEN: &str = r#"
echo "git: corrupted installation" >&2
exit 2
"#;
}

/// Check if network tests should be skipped.
///
/// Returns `true` if the `SKIP_NETWORK_TESTS` environment variable is set.
#[allow(dead_code)]
pub fn should_skip_network_tests() -> bool {
    env::var("SKIP_NETWORK_TESTS").is_ok()
}

/// A temporary working directory plus an optional fake `git`.
///
/// The script lives in a `bin/` subdirectory so that it never shows up in
/// the listing of the cloned repository.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    git_program: Option<String>,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
            git_program: None,
        }
    }

    /// Install a fake `git` whose shell body is `script`.
    #[cfg(unix)]
    pub fn with_git(mut self, script: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.temp_dir.child("bin");
        bin.create_dir_all().expect("Failed to create bin directory");
        let git = bin.child("git");
        git.write_str(&format!("#!/bin/sh\n{}", script))
            .expect("Failed to write fake git");
        std::fs::set_permissions(git.path(), std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake git executable");

        self.git_program = Some(git.path().to_string_lossy().into_owned());
        self
    }

    /// Point the binary at a program that does not exist.
    #[allow(dead_code)]
    pub fn with_missing_git(mut self) -> Self {
        let missing = self.temp_dir.path().join("bin").join("no-such-git");
        self.git_program = Some(missing.to_string_lossy().into_owned());
        self
    }

    /// Create a pre-existing destination with a marker file in it.
    #[allow(dead_code)]
    pub fn with_existing_destination(self, name: &str) -> Self {
        self.temp_dir
            .child(name)
            .child("stale.txt")
            .write_str("left over from a previous clone")
            .expect("Failed to write stale file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// The binary, running in the fixture with the fake `git` configured.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("qmark-clone");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("CLICOLOR_FORCE");
        match &self.git_program {
            Some(program) => cmd.env("QMARK_CLONE_GIT", program),
            None => cmd.env_remove("QMARK_CLONE_GIT"),
        };
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
