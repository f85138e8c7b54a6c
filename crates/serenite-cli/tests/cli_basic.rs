//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "serenite-cli", "--"])
        .args(args)
        .env("SERENITE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_exercise_list() {
    let (stdout, _, code) = run_cli(&["exercise", "list"]);
    assert_eq!(code, 0, "exercise list failed");
    assert!(stdout.contains("breathing"));
    assert!(stdout.contains("4-7-8 Technique"));
}

#[test]
fn test_exercise_show_falls_back() {
    let (stdout, _, code) = run_cli(&["exercise", "show", "no-such-exercise"]);
    assert_eq!(code, 0, "exercise show failed");
    assert!(stdout.contains("Diaphragmatic Breathing"));
}

#[test]
fn test_timer_status_is_json() {
    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("status not JSON");
    assert_eq!(value["type"], "StateSnapshot");
}

#[test]
fn test_stats_show_is_json() {
    let (stdout, _, code) = run_cli(&["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stats not JSON");
    assert!(value.get("completed_this_week").is_some());
    assert!(value.get("current_streak_days").is_some());
}

#[test]
fn test_journal_add_rejects_out_of_range_anxiety() {
    let (_, stderr, code) = run_cli(&["journal", "add", "--anxiety", "11"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("anxiety_level"));
}

#[test]
fn test_data_export_is_json() {
    let (stdout, _, code) = run_cli(&["data", "export"]);
    assert_eq!(code, 0, "data export failed");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("export not JSON");
    assert!(value.get("journalData").is_some());
    assert!(value.get("exerciseData").is_some());
    assert!(value.get("exportDate").is_some());
}
