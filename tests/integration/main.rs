//! Integration tests for the `lonker` library and binary.

mod basic_pipe;
mod cli_flags;
mod config_custom;
mod scenarios;

use assert_cmd::Command;
use regex::Regex;

#[allow(deprecated)]
pub fn lonker() -> Command {
    let mut cmd = Command::cargo_bin("lonker").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/tmp/lonker-test-no-config");
    cmd
}

/// Remove SGR escape sequences so assertions can match visible text.
pub fn strip_ansi(s: &str) -> String {
    Regex::new(r"\x1b\[[0-9;]*m")
        .unwrap()
        .replace_all(s, "")
        .into_owned()
}
