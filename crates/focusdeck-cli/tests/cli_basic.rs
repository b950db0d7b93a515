//! Basic CLI E2E tests.
//!
//! Invoke the binary via cargo run and verify argument parsing; data
//! goes to the dev directory so a developer's real state is untouched.

use std::process::Command;

fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "focusdeck-cli", "--"])
        .args(args)
        .env("FOCUSDECK_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn help_lists_all_subcommands() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for cmd in ["task", "project", "plan", "timer", "stats", "config"] {
        assert!(stdout.contains(cmd), "help missing subcommand {cmd}");
    }
}

#[test]
fn unknown_subcommand_fails() {
    let (_, _, code) = run_cli(&["frobnicate"]);
    assert_ne!(code, 0);
}

#[test]
fn task_create_and_list_round_trip() {
    let (stdout, stderr, code) = run_cli(&["task", "create", "CLI smoke task"]);
    assert_eq!(code, 0, "create failed: {stderr}");
    assert!(stdout.contains("Task created:"));

    let (stdout, _, code) = run_cli(&["task", "list"]);
    assert_eq!(code, 0);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).expect("JSON list output");
    assert!(tasks
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t["title"] == "CLI smoke task"));
}

/// Open the same dev blob store the CLI subprocesses use.
fn dev_blob() -> focusdeck_core::BlobStore {
    std::env::set_var("FOCUSDECK_ENV", "dev");
    focusdeck_core::BlobStore::open().expect("dev blob store")
}

#[test]
fn config_set_mirrors_into_snapshot() {
    // Concurrent CLI invocations from sibling tests share the dev blob,
    // so allow one re-run before judging the snapshot contents.
    for attempt in 0..2 {
        let (_, stderr, code) = run_cli(&["config", "set", "timer.long_break_min", "20"]);
        assert_eq!(code, 0, "config set failed: {stderr}");

        let json = dev_blob()
            .get(focusdeck_core::storage::SLOT_APP_STATE)
            .unwrap()
            .expect("snapshot written");
        let state: serde_json::Value = serde_json::from_str(&json).unwrap();
        if state["settings"]["timer"]["long_break_min"] == 20 {
            return;
        }
        assert!(attempt == 0, "snapshot settings mirror missing: {state}");
    }
}

#[test]
fn corrupt_timer_blob_warns_and_starts_fresh() {
    {
        let blob = dev_blob();
        blob.set(focusdeck_core::storage::SLOT_TIMER, "not json")
            .unwrap();
    }

    let (stdout, stderr, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "status failed: {stderr}");
    assert!(
        stderr.contains("warning"),
        "expected a decode warning, got: {stderr}"
    );
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).expect("JSON snapshot");
    assert_eq!(snapshot["type"], "StateSnapshot");
    assert_eq!(snapshot["state"], "idle");
    assert!(snapshot["remaining_ms"].is_u64());

    // The fresh coordinator was persisted; the next status is clean.
    let (_, stderr, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0);
    assert!(!stderr.contains("warning"), "unexpected warning: {stderr}");
}
