//! Binary smoke tests.

use super::common::{write_input, MIXED};
use std::fs;
use std::process::Command;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_acronymic"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_complete_writes_output_file() {
    let (dir, path) = write_input(MIXED, &["NYC", "qq"]);
    let out = dir.path().join("Output.txt");

    let status = bin()
        .args(["complete", path.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(fs::read_to_string(&out).unwrap(), "[NYC]\nnew york city\nnyc tours\n");
}

#[test]
fn test_parallel_output_is_identical() {
    let (_dir, path) = write_input(MIXED, &["NYC", "cat", "roc", "at", "of"]);
    let sequential = bin().args(["complete", path.to_str().unwrap()]).output().unwrap();
    let parallel = bin()
        .args(["complete", path.to_str().unwrap(), "--parallel"])
        .output()
        .unwrap();
    assert!(sequential.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn test_bad_structure_exits_nonzero() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("Input.txt");
    fs::write(&path, "only a dictionary\n").unwrap();

    let output = bin().args(["complete", path.to_str().unwrap()]).output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("structure of input file is incorrect"));
}

#[test]
fn test_query_prints_ranked_hits() {
    let (_dir, path) = write_input(MIXED, &["zz"]);
    let output = bin()
        .args(["query", path.to_str().unwrap(), "cat", "-n", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "[cat]\n  1. the cat sat\n  2. catalog\n");
}
