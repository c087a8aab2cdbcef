//! Integration tests for the demo driver binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests

use predicates::prelude::*;

#[test]
fn test_default_run_prints_table() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vuelta");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Name,"))
        .stdout(predicate::str::contains("Time 0,"));
}

#[test]
fn test_laps_flag_controls_column_count() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vuelta");
    cmd.arg("--laps").arg("3");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Time 2,"))
        .stdout(predicate::str::contains("Time 3,").not());
}

#[test]
fn test_trials_flag_adds_rows() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vuelta");
    cmd.arg("--trials").arg("3").arg("--laps").arg("1");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    // Header plus one ordinal-named row per trial
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("\n0,"));
    assert!(stdout.contains("\n2,"));
}

#[test]
fn test_json_format() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vuelta");
    cmd.arg("--format").arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("vuelta-json-v1"))
        .stdout(predicate::str::contains("\"laps_ns\""));
}

#[test]
fn test_summary_flag_prints_stats_to_stderr() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vuelta");
    cmd.arg("-c");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("% time"))
        .stderr(predicate::str::contains("ns/lap"))
        .stderr(predicate::str::contains("total"));
}

#[test]
fn test_summary_does_not_pollute_stdout() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("vuelta");
    cmd.arg("-c");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("% time").not());
}
