use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(file: &Path, args: &[&str]) -> Output {
    let exe = env!("CARGO_BIN_EXE_tdl");
    Command::new(exe)
        .arg("--file")
        .arg(file)
        .args(args)
        .output()
        .expect("failed to run tdl")
}

#[test]
fn list_on_a_missing_file_shows_an_empty_view() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("todo.json");

    let output = run(&file, &["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(empty)"));
}

#[test]
fn list_shows_tasks_with_status_and_tallies() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("todo.json");

    run(&file, &["add", "buy milk"]);
    run(&file, &["add", "write report"]);
    run(&file, &["done", "1"]);

    let output = run(&file, &["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("buy milk"));
    assert!(stdout.contains("write report"));
    assert!(stdout.contains("COMPLETED"));
    assert!(stdout.contains("PENDING"));
    assert!(stdout.contains("pending: 1"));
    assert!(stdout.contains("completed: 1"));
    // indexed view keeps the position column
    assert!(stdout.contains("#"));
    // both timestamps were set today
    assert!(stdout.contains("Today -"));
    // pending task has no completion timestamp yet
    assert!(stdout.contains("…"));
}

#[test]
fn completed_filter_omits_pending_tasks_and_the_index_column() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("todo.json");

    run(&file, &["add", "buy milk"]);
    run(&file, &["add", "write report"]);
    run(&file, &["done", "2"]);

    let output = run(&file, &["list", "--completed"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("write report"));
    assert!(!stdout.contains("buy milk"));
    assert!(!stdout.contains("#"));
}

#[test]
fn pending_filter_omits_completed_tasks() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("todo.json");

    run(&file, &["add", "buy milk"]);
    run(&file, &["add", "write report"]);
    run(&file, &["done", "2"]);

    let output = run(&file, &["list", "--pending"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("buy milk"));
    assert!(!stdout.contains("write report"));
}

#[test]
fn filter_flags_are_mutually_exclusive() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("todo.json");

    let output = run(&file, &["list", "--completed", "--pending"]);

    assert!(!output.status.success());
}

#[test]
fn list_fails_on_a_malformed_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("todo.json");
    std::fs::write(&file, "{ not json ]").unwrap();

    let output = run(&file, &["list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse JSON"));
}
