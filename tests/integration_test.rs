// tests/integration_test.rs
use std::process::{Command, Output};

fn branch_version(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_branch-version"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap().trim().to_string()
}

#[test]
fn test_help() {
    let output = branch_version(&["--help"]);
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("branch-version"));
    assert!(text.contains("Build package version strings from branch names"));
}

#[test]
fn test_version_flag() {
    let output = branch_version(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_legacy_version_on_stdout() {
    let output = branch_version(&[
        "1.0.0",
        "--config",
        "tests/fixtures/empty.toml",
        "--branch",
        "refs/heads/feature/test_cake_version",
        "--trim",
        "feature/",
        "--always-prefix",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.0.0-b-test-cake-version");
}

#[test]
fn test_semver2_version_on_stdout() {
    let output = branch_version(&[
        "1.0.3",
        "--config",
        "tests/fixtures/empty.toml",
        "--semver2",
        "--branch",
        "refs/heads/releases/release-v4_2",
        "--filter",
        "^master$",
        "--filter",
        "^releases/release-.*",
        "--change-number",
        "5",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.0.8");
}

#[test]
fn test_warnings_go_to_stderr() {
    let output = branch_version(&[
        "1.0.0",
        "--config",
        "tests/fixtures/empty.toml",
        "--branch",
        "feature/test_cake_version",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1.0.0-feature-test-cake-v");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("truncated"));
}

#[test]
fn test_missing_branch_fails() {
    let output = branch_version(&["1.0.0", "--config", "tests/fixtures/empty.toml"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Branch name is required"));
}

#[test]
fn test_invalid_version_fails() {
    let output = branch_version(&[
        "1.0",
        "--config",
        "tests/fixtures/empty.toml",
        "--branch",
        "master",
    ]);
    assert_eq!(output.status.code(), Some(1));
}
