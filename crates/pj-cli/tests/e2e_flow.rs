//! End-to-end tests driving the `pj` binary.
//!
//! Tests the full lifecycle: add → list → update → delete → summary → export

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn pj_binary() -> String {
    env!("CARGO_BIN_EXE_pj").to_string()
}

/// Runs `pj` against a journal database inside `temp`.
fn pj(temp: &Path, args: &[&str]) -> Output {
    Command::new(pj_binary())
        .env("HOME", temp)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG")
        .env("PJ_DATABASE_PATH", db_path(temp))
        .env("PJ_EXPORT_DIR", temp.join("exports"))
        .args(args)
        .output()
        .expect("failed to run pj")
}

fn db_path(temp: &Path) -> PathBuf {
    temp.join("data").join("journal.db")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "pj should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn add(temp: &Path, category: &str, details: &str, hours: &str, owner: &str) {
    let output = pj(
        temp,
        &[
            "add",
            "--category",
            category,
            "--details",
            details,
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-02",
            "--hours",
            hours,
            "--owner",
            owner,
        ],
    );
    assert!(stdout(&output).starts_with("Added entry #"));
}

fn list_json(temp: &Path, extra: &[&str]) -> Vec<Value> {
    let mut args = vec!["list", "--json"];
    args.extend_from_slice(extra);
    let output = pj(temp, &args);
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    value.as_array().unwrap().clone()
}

#[test]
fn test_full_journal_lifecycle() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    add(root, "firm-building", "Plan, Q1", "2.5", "Amy");
    add(root, "Personal Development", "Training", "1", "Ben");
    add(root, "personal-eminence", "Budget review talk", "0.5", "amy");

    let entries = list_json(root, &[]);
    assert_eq!(entries.len(), 3);
    let numbers: Vec<i64> = entries.iter().map(|e| e["no"].as_i64().unwrap()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    // Search and category combine with AND
    let found = list_json(root, &["--search", "REVIEW"]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["activityDetails"], "Budget review talk");
    let none = list_json(root, &["--search", "review", "--category", "firm-building"]);
    assert!(none.is_empty());

    // Update by ID prefix
    let training_id = entries[1]["id"].as_str().unwrap().to_string();
    let output = pj(root, &["update", &training_id[..8], "--hours", "3"]);
    assert_eq!(
        stdout(&output),
        format!("Updated entry #2 ({training_id})\n")
    );

    // Delete the first entry; the rest are renumbered
    let first_id = entries[0]["id"].as_str().unwrap().to_string();
    let output = pj(root, &["delete", &first_id]);
    assert!(stdout(&output).contains("2 entries remaining"));

    let entries = list_json(root, &[]);
    let remaining: Vec<(i64, &str)> = entries
        .iter()
        .map(|e| {
            (
                e["no"].as_i64().unwrap(),
                e["activityDetails"].as_str().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        remaining,
        vec![(1, "Training"), (2, "Budget review talk")]
    );
    assert_eq!(entries[0]["hoursSpent"], 3.0);

    // Summary covers every category
    let output = pj(root, &["summary", "--json"]);
    let summary: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["totalCount"], 2);
    assert_eq!(summary["totalHours"], 3.5);
    assert_eq!(summary["perCategory"][0]["count"], 0);

    // Owners are ordinally sorted
    let output = pj(root, &["owners"]);
    assert_eq!(stdout(&output), "Ben\namy\n");

    // Export to the configured directory
    let output = pj(root, &["export", "--owner", "amy"]);
    let message = stdout(&output);
    assert!(message.starts_with("Exported 1 entry to "));
    let path = message
        .trim_end()
        .strip_prefix("Exported 1 entry to ")
        .unwrap();
    assert!(path.contains("performance-journal-"));
    let csv = std::fs::read_to_string(path).unwrap();
    assert_eq!(
        csv,
        "No,Category,Activity Details,Activity Start,Activity End,Hours Spent,Activity Owner\n\
         2,Personal Eminence,Budget review talk,2024-01-01,2024-01-02,0.5,amy"
    );
}

#[test]
fn test_invalid_entry_is_rejected() {
    let temp = TempDir::new().unwrap();

    let output = pj(
        temp.path(),
        &[
            "add",
            "--category",
            "firm-building",
            "--details",
            "Backwards",
            "--start",
            "2024-02-02",
            "--end",
            "2024-02-01",
            "--hours",
            "1",
            "--owner",
            "Amy",
        ],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is before activity start"), "stderr: {stderr}");
    assert!(list_json(temp.path(), &[]).is_empty());
}

#[test]
fn test_unknown_category_filter_fails() {
    let temp = TempDir::new().unwrap();

    let output = pj(temp.path(), &["list", "--category", "networking"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown category"), "stderr: {stderr}");
}

#[test]
fn test_corrupted_journal_loads_as_empty() {
    let temp = TempDir::new().unwrap();
    let path = db_path(temp.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();

    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch(
        "
        CREATE TABLE kv (key TEXT PRIMARY KEY, value TEXT NOT NULL);
        INSERT INTO kv (key, value) VALUES ('performance-journal-entries', '[{broken');
        ",
    )
    .unwrap();
    drop(conn);

    let output = pj(temp.path(), &["list"]);
    assert!(stdout(&output).starts_with("No entries recorded."));

    // The next write replaces the corrupted blob.
    add(temp.path(), "firm-building", "Fresh start", "1", "Amy");
    let entries = list_json(temp.path(), &[]);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["no"], 1);
}

#[test]
fn test_no_subcommand_prints_help() {
    let temp = TempDir::new().unwrap();

    let output = pj(temp.path(), &[]);
    let text = stdout(&output);

    assert!(text.contains("Usage: pj"));
    assert!(!db_path(temp.path()).exists());
}
