// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

pub const HEADER: &str = "Process\tTrace\tDebug\tInfo\tWarn\tError";

fn binary_path() -> &'static str {
    env!("CARGO_BIN_EXE_logtally")
}

/// Run logtally with the given arguments
pub fn run_logtally(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute logtally");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Run logtally with given arguments and input via stdin
pub fn run_logtally_with_input(args: &[&str], input: &str) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path())
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start logtally");

    if let Some(stdin) = cmd.stdin.as_mut() {
        stdin
            .write_all(input.as_bytes())
            .expect("Failed to write to stdin");
    }

    let output = cmd.wait_with_output().expect("Failed to read output");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Run logtally on a directory
pub fn run_logtally_on_dir(args: &[&str], dir: &Path) -> (String, String, i32) {
    let mut full_args = args.to_vec();
    full_args.push(dir.to_str().expect("utf-8 temp path"));
    run_logtally(&full_args)
}

/// Create a temp directory populated with `(relative path, content)` files
pub fn log_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (relative, content) in files {
        let path: PathBuf = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write log file");
    }
    dir
}

/// Data rows of a table report, split into cells
pub fn table_rows(stdout: &str) -> Vec<Vec<String>> {
    stdout
        .lines()
        .skip_while(|line| *line != HEADER)
        .skip(1)
        .map(|line| line.split('\t').map(str::to_string).collect())
        .collect()
}
