//! ANSI styling of text fragments.
//!
//! Colors close with `ESC[39m` (default foreground) and bold closes with
//! `ESC[22m` (normal intensity) rather than a full `ESC[0m` reset, so a styled
//! fragment can sit inside another styled fragment without clobbering it.

use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::color::ConsoleColor;

/// Bold-on escape.
pub const INTENSITY_BOLD: &str = "\x1b[1m";

/// Normal-intensity escape (ends bold without resetting color).
pub const INTENSITY_DEFAULT: &str = "\x1b[22m";

/// Default-foreground escape.
pub const FOREGROUND_DEFAULT: &str = "\x1b[39m";

/// Wrap `text` in the foreground `color`, and in bold when `bold` is set.
///
/// ```
/// use lonker::{ConsoleColor, style::styled};
///
/// assert_eq!(styled("hi", ConsoleColor::Red, false), "\x1b[31mhi\x1b[39m");
/// assert_eq!(
///     styled("hi", ConsoleColor::Red, true),
///     "\x1b[1m\x1b[31mhi\x1b[39m\x1b[22m"
/// );
/// ```
pub fn styled(text: &str, color: ConsoleColor, bold: bool) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    write_styled(&mut out, text, color, bold);
    out
}

/// Append the styled form of `text` to `out`.
pub fn write_styled(out: &mut String, text: &str, color: ConsoleColor, bold: bool) {
    if bold {
        out.push_str(INTENSITY_BOLD);
    }
    let _ = write!(out, "{}", text.color(color.ansi()));
    if bold {
        out.push_str(INTENSITY_DEFAULT);
    }
}

/// Bold without touching the foreground color.
pub fn bold(text: &str) -> String {
    format!("{INTENSITY_BOLD}{text}{INTENSITY_DEFAULT}")
}
