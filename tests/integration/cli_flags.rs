//! Integration tests for styling flags, computed labels, verbose gating,
//! the demo and shell completions.

use predicates::prelude::*;
use regex::Regex;

use crate::{lonker, strip_ansi};

#[test]
fn color_and_bold_override_channel_style() {
    lonker()
        .args(["--color", "green", "--bold"])
        .write_stdin("ok\n")
        .assert()
        .success()
        .stdout("\x1b[1m\x1b[32mok\x1b[39m\x1b[22m\n");
}

#[test]
fn invalid_color_is_rejected() {
    lonker()
        .args(["--color", "purple"])
        .write_stdin("x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid color 'purple'"));
}

#[test]
fn label_color_applies_to_label_text() {
    lonker()
        .args(["-L", "tag", "--label-color", "brightgreen"])
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[92mtag\x1b[39m"));
}

#[test]
fn time_label_uses_default_pattern() {
    let output = lonker().arg("--time").write_stdin("x\n").output().unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    let re = Regex::new(r"^\[\d{2}:\d{2}:\d{2}\.\d{3}\] x\n$").unwrap();
    assert!(re.is_match(&stdout), "unexpected output: {stdout:?}");
}

#[test]
fn time_format_flag_applies() {
    let output = lonker()
        .args(["--datetime", "--time-format", "yyyy"])
        .write_stdin("x\n")
        .output()
        .unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    let re = Regex::new(r"^\[\d{4}\] x\n$").unwrap();
    assert!(re.is_match(&stdout), "unexpected output: {stdout:?}");
}

#[test]
fn bad_time_format_fails_with_exit_one() {
    lonker()
        .args(["--time", "--time-format", "HH:mm:ss.fff"])
        .write_stdin("x\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid time format"));
}

#[test]
fn timer_label_counts_milliseconds() {
    let output = lonker()
        .args(["--timer", "--timer-format", "%d ms"])
        .write_stdin("x\n")
        .output()
        .unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    let re = Regex::new(r"^\[\d+ ms\] x\n$").unwrap();
    assert!(re.is_match(&stdout), "unexpected output: {stdout:?}");
}

#[test]
fn verbose_only_is_silent_without_verbose() {
    lonker()
        .arg("--verbose-only")
        .write_stdin("hidden\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn verbose_only_prints_with_verbose() {
    lonker()
        .args(["--verbose-only", "--verbose"])
        .write_stdin("shown\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("shown"));
}

#[test]
fn demo_runs_every_section() {
    let output = lonker().arg("--demo").output().unwrap();
    assert!(output.status.success());
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    let stderr = strip_ansi(&String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Simple log()"));
    assert!(stdout.contains("[A simple label] log() inside label"));
    assert!(stdout.contains("<Label1>_|_<Label2>#: "));
    assert!(stdout.contains("[numeric array] [ 1, 2, 3 ]"));
    assert!(stdout.contains("msec] timer label"));
    assert!(stderr.contains("Simple warn()"));
    assert!(stderr.contains("Simple error()"));
    assert!(!stdout.contains("verbose() only shows"));
}

#[test]
fn completions_print_script() {
    lonker()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lonker"));
}
