//! Integration tests for config files and their precedence.

use std::io::Write;

use predicates::prelude::*;

use crate::{lonker, strip_ansi};

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn config_file_changes_delimiters() {
    let config = config_file(
        r#"
label_start = "<"
label_end = ">"
label_terminator = ": "
"#,
    );
    let output = lonker()
        .arg("--config")
        .arg(config.path())
        .args(["-L", "a", "-L", "b"])
        .write_stdin("x\n")
        .output()
        .unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(stdout, "<a><b>: x\n");
}

#[test]
fn config_file_group_indent() {
    let config = config_file("group_indent = 3\n");
    let output = lonker()
        .arg("--config")
        .arg(config.path())
        .args(["--indent", "2"])
        .write_stdin("x\n")
        .output()
        .unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(stdout, "      x\n");
}

#[test]
fn config_file_channel_color() {
    let config = config_file("log_color = \"brightblue\"\nlog_bold = true\n");
    lonker()
        .arg("--config")
        .arg(config.path())
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout("\x1b[1m\x1b[94mx\x1b[39m\x1b[22m\n");
}

#[test]
fn unknown_color_in_config_falls_back_to_default() {
    let config = config_file("log_color = \"mauve\"\n");
    lonker()
        .arg("--config")
        .arg(config.path())
        .write_stdin("x\n")
        .assert()
        .success()
        .stdout("\x1b[39mx\x1b[39m\n");
}

#[test]
fn config_verbose_enables_verbose_only_lines() {
    let config = config_file("verbose = true\n");
    lonker()
        .arg("--config")
        .arg(config.path())
        .arg("--verbose-only")
        .write_stdin("shown\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("shown"));
}

#[test]
fn xdg_config_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("lonker")).unwrap();
    std::fs::write(dir.path().join("lonker").join("config.toml"), "label_end = \"}\"\n").unwrap();
    let output = lonker()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["-L", "x"])
        .write_stdin("y\n")
        .output()
        .unwrap();
    let stdout = strip_ansi(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(stdout, "[x} y\n");
}

#[test]
fn missing_config_file_exits_one() {
    lonker()
        .args(["--config", "/nonexistent/lonker.toml"])
        .write_stdin("x\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot read config file"));
}

#[test]
fn malformed_config_exits_one() {
    let config = config_file("group_indent = \n");
    lonker()
        .arg("--config")
        .arg(config.path())
        .write_stdin("x\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config file error"));
}

#[test]
fn unknown_config_key_exits_one() {
    let config = config_file("label_colour = \"red\"\n");
    lonker()
        .arg("--config")
        .arg(config.path())
        .write_stdin("x\n")
        .assert()
        .code(1);
}
