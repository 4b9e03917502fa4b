//! Integration tests for scanloc CLI

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::{tempdir, TempDir};

fn run_scanloc(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scanloc"))
        .args(args)
        .arg("--no-color")
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    // The process may exit without reading stdin
    if let Some(mut input) = child.stdin.take() {
        let _ = input.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait for command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.success())
}

/// Working directory with `inside/a.py`, `inside/b.txt` and an excluded
/// `inside/skip/c.py`.
fn project() -> TempDir {
    let temp = tempdir().unwrap();
    let inside = temp.path().join("inside");
    fs::create_dir_all(inside.join("skip")).unwrap();
    fs::write(
        inside.join("a.py"),
        "import os\nprint(os.getcwd())\nvalue = 1234\n",
    )
    .unwrap();
    fs::write(inside.join("b.txt"), "ignored\n").unwrap();
    fs::write(inside.join("skip/c.py"), "x = 1\n").unwrap();
    fs::write(temp.path().join(".filter"), ".skip\n\n").unwrap();
    temp
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_scanloc(temp.path(), &["--help"], "");

    assert!(success);
    assert!(stdout.contains("scanloc"));
    assert!(stdout.contains("--filter-file"));
    assert!(stdout.contains("--report"));
    assert!(stdout.contains("--yes"));
}

#[test]
fn test_counts_and_declines_report() {
    let temp = project();
    let (stdout, _, success) = run_scanloc(temp.path(), &[], "n\n");

    assert!(success);
    assert!(stdout.contains("Scanning directory 'inside'"));
    assert!(stdout.contains("Ignoring directories: {skip}"));
    assert!(stdout.contains("a.py | Lines: 3 | Characters: 42"));
    assert!(!stdout.contains("c.py"));
    assert!(!stdout.contains("b.txt"));
    assert!(stdout.contains("Total: files: 1 | lines: 3 | characters: 42"));
    assert!(stdout.contains("Create a .md report? (y/n): "));
    assert!(!temp.path().join("report.md").exists());
}

#[test]
fn test_writes_report_on_y() {
    let temp = project();
    let (stdout, _, success) = run_scanloc(temp.path(), &[], "Y\n");

    assert!(success);
    assert!(stdout.contains("Markdown report saved to report.md"));

    let report = fs::read_to_string(temp.path().join("report.md")).unwrap();
    assert!(report.starts_with("# File Analysis Report\n"));
    assert!(report.contains("**Files:** 1  |  **Lines:** 3  |  **Characters:** 42"));
    assert!(report.contains("| File | Lines | Characters |"));
    assert!(report.contains("a.py | 3 | 42 |"));
}

#[test]
fn test_yes_flag_skips_prompt() {
    let temp = project();
    let (stdout, _, success) = run_scanloc(temp.path(), &["--yes", "-o", "sizes.md"], "");

    assert!(success);
    assert!(!stdout.contains("(y/n)"));
    assert!(temp.path().join("sizes.md").exists());
}

#[test]
fn test_missing_root_exits_cleanly() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_scanloc(temp.path(), &[], "y\n");

    assert!(success);
    assert!(stdout.contains("No matching files found in 'inside'"));
    assert!(!stdout.contains("Total:"));
    assert!(!temp.path().join("report.md").exists());
}

#[test]
fn test_closed_stdin_declines() {
    let temp = project();
    let (_, _, success) = run_scanloc(temp.path(), &[], "");

    assert!(success);
    assert!(!temp.path().join("report.md").exists());
}

#[test]
fn test_report_write_failure_still_succeeds() {
    let temp = project();
    let (stdout, _, success) = run_scanloc(
        temp.path(),
        &["--yes", "--report", "missing-dir/report.md"],
        "",
    );

    assert!(success);
    assert!(stdout.contains("Total: files: 1"));
    assert!(stdout.contains("Error: failed to write report"));
}
