//! Binary-level CLI tests.
//!
//! These never reach the Go toolchain: every scenario stops at argument
//! parsing or precondition validation.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn validate_fails_cleanly_outside_a_checkout() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("mcp_bridge_dist")
        .unwrap()
        .current_dir(dir.path())
        .arg("validate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("client module directory not found"));
}

#[test]
fn package_requires_an_endpoint_url() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("mcp_bridge_dist")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("MCP_BRIDGE_INSTALL_URL")
        .arg("package")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--url"));
}

#[test]
fn blank_endpoint_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("mcp_bridge_dist")
        .unwrap()
        .current_dir(dir.path())
        .args(["package", "--url", "  "])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--url must not be empty"));
}

#[test]
fn package_reports_missing_module_before_building() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("mcp_bridge_dist")
        .unwrap()
        .current_dir(dir.path())
        .args(["package", "--url", "http://localhost:8080/sse"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("precondition failed"));

    // Precondition failures must not leave directories behind
    assert!(!dir.path().join("dist").exists());
    assert!(!dir.path().join("release").exists());
}

#[test]
fn help_lists_both_subcommands() {
    Command::cargo_bin("mcp_bridge_dist")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("package"))
        .stdout(predicate::str::contains("validate"));
}
