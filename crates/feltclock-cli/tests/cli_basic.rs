//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a temporary
//! structure file and verify outputs.

use std::path::Path;
use std::process::Command;

const STRUCTURE: &str = r#"
title = "Test Event"
buy_in = 20

[rake]
kind = "flat"
amount = 5.0

[players]
start_stack = 10000
start = 10

[[blocks]]
name = "Level 1"
minutes = 20

[[blocks]]
name = "Break"
minutes = 5
kind = "break"

[[blocks]]
name = "Level 2"
minutes = 20

[[payouts]]
max_players = 100
fractions = [0.5, 0.3, 0.2]
"#;

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "feltclock-cli", "--quiet", "--"])
        .args(args)
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_structure(dir: &Path) -> String {
    let path = dir.join("structure.toml");
    std::fs::write(&path, STRUCTURE).expect("write structure file");
    path.to_string_lossy().into_owned()
}

#[test]
fn schedule_prints_the_block_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_structure(dir.path());
    let (stdout, _, code) = run_cli(&["schedule", &path]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Test Event"));
    assert!(stdout.contains("Level 1"));
    assert!(stdout.contains("total 45:00"));
    assert!(stdout.contains("100.0k chips in play"));
}

#[test]
fn payouts_prints_the_breakdown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_structure(dir.path());
    let (stdout, _, code) = run_cli(&["payouts", &path, "--players", "10"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("breakdown JSON");
    assert_eq!(parsed["gross_pool"], 200);
    assert_eq!(parsed["net_pool"], 150);
    assert_eq!(parsed["prizes"][0]["amount"], 75);
    assert_eq!(parsed["chop"], 15);
}

#[test]
fn payouts_reports_uncovered_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_structure(dir.path());
    let (stdout, _, code) = run_cli(&["payouts", &path, "--players", "500"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("no payout bracket covers 500 players"));
}

#[test]
fn run_emits_an_initial_update() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_structure(dir.path());
    let (stdout, _, code) = run_cli(&["run", &path, "--muted", "--max-updates", "1"]);
    assert_eq!(code, 0);
    let first = stdout.lines().next().expect("one JSON line");
    let parsed: serde_json::Value = serde_json::from_str(first).expect("update JSON");
    assert_eq!(parsed["block_index"], 0);
    assert_eq!(parsed["display"]["level_title"], "Level 1");
    assert_eq!(parsed["display"]["level_time"], "20:00");
}

#[test]
fn missing_file_fails_with_an_error() {
    let (_, stderr, code) = run_cli(&["schedule", "/nonexistent/structure.toml"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}
