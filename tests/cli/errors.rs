//! Tests for error handling and global CLI flags.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help_lists_commands() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for command in ["upload", "delete", "seal", "completions"] {
        assert!(out.contains(command), "help missing {}: {}", command, out);
    }
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("drivepost "));
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    t.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_drivepost"));
}

#[test]
fn test_completions_invalid_shell() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_verbose_flag_accepted_after_subcommand() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["completions", "zsh", "--verbose"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_delete_requires_reference() {
    let t = Test::new();

    let output = t.cmd().arg("delete").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "ID_OR_LINK");
}

#[test]
fn test_upload_requires_file() {
    let t = Test::new();

    let output = t.cmd().arg("upload").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--file");
}
