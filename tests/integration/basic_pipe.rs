//! Integration tests for basic stdin->stdout piping.

use predicates::prelude::*;

use crate::{lonker, strip_ansi};

#[test]
fn empty_stdin_exits_zero() {
    lonker().write_stdin("").assert().success().stdout("");
}

#[test]
fn single_line_is_styled_white() {
    lonker()
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout("\x1b[37mhello\x1b[39m\n");
}

#[test]
fn every_line_is_emitted_in_order() {
    let output = lonker().write_stdin("one\ntwo\nthree\n").output().unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(stdout, "one\ntwo\nthree\n");
}

#[test]
fn blank_lines_pass_through_unstyled() {
    let output = lonker()
        .args(["--label", "x"])
        .write_stdin("a\n\nb\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    // Empty values bypass formatting entirely: no label, no escapes.
    assert_eq!(lines[1], "");
}

#[test]
fn label_prefixes_every_line() {
    let output = lonker()
        .args(["--label", "build"])
        .write_stdin("compiling\nlinking\n")
        .output()
        .unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(stdout, "[build] compiling\n[build] linking\n");
}

#[test]
fn nested_labels_render_oldest_first() {
    let output = lonker()
        .args(["-L", "outer", "-L", "inner"])
        .write_stdin("x\n")
        .output()
        .unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(stdout, "[outer][inner] x\n");
}

#[test]
fn indent_adds_two_spaces_per_group() {
    let output = lonker()
        .args(["--indent", "2"])
        .write_stdin("deep\n")
        .output()
        .unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(stdout, "    deep\n");
}

#[test]
fn warn_and_error_go_to_stderr() {
    lonker()
        .args(["--channel", "warn"])
        .write_stdin("careful\n")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("\x1b[33mcareful\x1b[39m"));

    lonker()
        .args(["-c", "error"])
        .write_stdin("boom\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("\x1b[1m\x1b[91mboom\x1b[39m\x1b[22m"));
}

#[test]
fn info_goes_to_stdout_in_bright_cyan() {
    lonker()
        .args(["-c", "info"])
        .write_stdin("note\n")
        .assert()
        .success()
        .stdout("\x1b[96mnote\x1b[39m\n");
}
