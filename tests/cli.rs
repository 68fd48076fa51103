//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_report_status(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_report-status");
    Command::new(bin).args(args).output().expect("failed to run report-status binary")
}

#[test]
fn report_without_inputs_shows_required_flags() {
    let output = run_report_status(&["report"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("--status"));
    assert!(stderr.contains("--issue-repository"));
    assert!(stderr.contains("--issue-number"));
}

#[test]
fn report_help_shows_all_inputs() {
    let output = run_report_status(&["report", "--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--status"));
    assert!(stdout.contains("--run-id"));
    assert!(stdout.contains("--source-sha"));
    assert!(stdout.contains("--project-sha"));
}

#[test]
fn cancelled_status_exits_cleanly_with_warning() {
    // The cancelled short-circuit happens before any tracker call, so this
    // needs neither a token nor network access.
    let output = run_report_status(&[
        "report",
        "--status",
        "cancelled",
        "--issue-repository",
        "acme/ci-reports",
        "--issue-number",
        "42",
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("::warning::"));
    assert!(stdout.contains("cancelled"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_report_status(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn invalid_issue_number_exits_with_error() {
    let output = run_report_status(&[
        "report",
        "--status",
        "success",
        "--issue-repository",
        "acme/ci-reports",
        "--issue-number",
        "forty-two",
    ]);
    assert!(!output.status.success());
}
