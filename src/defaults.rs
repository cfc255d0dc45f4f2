//! Default values for qmark-clone configuration.
//!
//! The repository reference is fixed at build time. These constants are
//! only read by [`crate::config::CloneConfig::default`]; everything else
//! receives the values through an explicit config.

/// URL of the repository this tool clones.
pub const DEFAULT_REPO_URL: &str = "https://github.com/Vgactec/qmark.git";

/// Directory name `git clone` derives from [`DEFAULT_REPO_URL`].
pub const DEFAULT_DESTINATION: &str = "qmark";

/// Version-control program invoked for the version check and the clone.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Environment variable that overrides [`DEFAULT_GIT_PROGRAM`].
pub const GIT_PROGRAM_ENV: &str = "QMARK_CLONE_GIT";
