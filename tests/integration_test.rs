//! Clones the real repository with the system `git`.
//!
//! Needs network access and an installed `git`; enable with
//! `--features integration-tests`, skip with `SKIP_NETWORK_TESTS`.

mod common;
use common::prelude::*;

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_clone_real_repository() {
    if should_skip_network_tests() {
        println!("Skipping network integration test");
        return;
    }

    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--color=never")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("✓ git is available"))
        .stdout(predicate::str::contains("Contents of 'qmark':"));

    fixture.child("qmark/.git").assert(predicate::path::is_dir());
}
