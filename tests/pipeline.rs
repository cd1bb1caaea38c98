//! End-to-end tests for the linesort binary.
//!
//! Spawns the real binary in a temp working directory and verifies the
//! output file contents and the always-zero exit status.

use std::fs;
use std::path::Path;
use std::process::Command;

fn run_linesort(dir: &Path) -> std::process::ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_linesort"))
        .current_dir(dir)
        .status()
        .expect("run linesort")
}

#[test]
fn sorts_each_line_and_skips_bad_input() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("input.txt"),
        "5 3 1 4 2\n\n2 2 1\nbad line\n",
    )
    .expect("write input");

    let status = run_linesort(temp.path());

    assert_eq!(status.code(), Some(0));
    let output = fs::read_to_string(temp.path().join("output.txt")).expect("read output");
    assert_eq!(output, "[1, 2, 3, 4, 5]\n[1, 2, 2]\n");
}

#[test]
fn missing_input_exits_zero_with_empty_output() {
    let temp = tempfile::tempdir().expect("tempdir");

    let status = run_linesort(temp.path());

    assert_eq!(status.code(), Some(0));
    let output = fs::read_to_string(temp.path().join("output.txt")).expect("read output");
    assert_eq!(output, "");
}

#[test]
fn handles_negatives_and_single_element_lists() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("input.txt"), "0 -3 7 -3\n42\n").expect("write input");

    let status = run_linesort(temp.path());

    assert_eq!(status.code(), Some(0));
    let output = fs::read_to_string(temp.path().join("output.txt")).expect("read output");
    assert_eq!(output, "[-3, -3, 0, 7]\n[42]\n");
}

#[test]
fn overwrites_a_stale_output_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("input.txt"), "2 1\n").expect("write input");
    fs::write(temp.path().join("output.txt"), "old run\nold run\n").expect("seed output");

    let status = run_linesort(temp.path());

    assert_eq!(status.code(), Some(0));
    let output = fs::read_to_string(temp.path().join("output.txt")).expect("read output");
    assert_eq!(output, "[1, 2]\n");
}
