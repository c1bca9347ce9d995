//! Smoke tests for the binary's argument surface

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_store_flags() {
    let mut cmd = Command::cargo_bin("sudokud").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("DB_PASSWORD"))
        .stdout(predicate::str::contains("--max-connections"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("sudokud").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_invalid_port_fails() {
    let mut cmd = Command::cargo_bin("sudokud").unwrap();
    cmd.arg("--port").arg("not-a-port");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}
