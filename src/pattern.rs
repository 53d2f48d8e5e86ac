//! Date pattern translation.
//!
//! Label patterns use the token language of common date formatting
//! libraries (`MMM dd HH:mm:ss`, `dd/MM/yyyy`, `HH:mm:ss.SSS`). A token is a
//! run of one repeated ASCII letter; its length picks the form. Text between
//! single quotes is literal and `''` is a quote. Every other non-letter is
//! literal. Patterns are compiled to [`jiff::fmt::strtime`] directives.
//!
//! | Token        | Meaning                      | Example   |
//! |--------------|------------------------------|-----------|
//! | `yyyy`, `y`  | year                         | `2026`    |
//! | `yy`         | two-digit year               | `26`      |
//! | `M` / `MM`   | month number                 | `1` / `01`|
//! | `MMM`/`MMMM` | month name                   | `Jan` / `January` |
//! | `d` / `dd`   | day of month                 | `5` / `05`|
//! | `E`..`EEE`/`EEEE` | weekday name            | `Thu` / `Thursday` |
//! | `H` / `HH`   | hour, 0-23                   | `9` / `09`|
//! | `h` / `hh`   | hour, 1-12                   | `9` / `09`|
//! | `m` / `mm`   | minute                       | `7` / `07`|
//! | `s` / `ss`   | second                       | `3` / `03`|
//! | `S`..`SSS`   | fraction of a second         | `123`     |
//! | `a`          | AM / PM                      | `PM`      |
//! | `xx` / `xxx` | UTC offset                   | `+0100` / `+01:00` |
//!
//! Any other unquoted letter is an error.

use jiff::Zoned;

use crate::error::PatternError;

/// Compile a date pattern to a strftime pattern.
pub fn to_strtime(pattern: &str) -> Result<String, PatternError> {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\'' {
            if chars.next_if_eq(&'\'').is_some() {
                out.push('\'');
                continue;
            }
            // quoted literal, running to the closing quote or the end
            while let Some(c) = chars.next() {
                if c == '\'' {
                    if chars.next_if_eq(&'\'').is_some() {
                        out.push('\'');
                        continue;
                    }
                    break;
                }
                push_literal(&mut out, c);
            }
        } else if ch.is_ascii_alphabetic() {
            let mut len = 1;
            while chars.next_if_eq(&ch).is_some() {
                len += 1;
            }
            let directive = directive(ch, len)
                .ok_or_else(|| PatternError::UnknownToken(ch.to_string().repeat(len)))?;
            out.push_str(directive);
        } else {
            push_literal(&mut out, ch);
        }
    }

    Ok(out)
}

/// Format `now` with a date pattern.
pub fn format(pattern: &str, now: &Zoned) -> Result<String, PatternError> {
    let compiled = to_strtime(pattern)?;
    Ok(jiff::fmt::strtime::format(compiled.as_str(), now)?)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

const fn directive(letter: char, len: usize) -> Option<&'static str> {
    let directive = match (letter, len) {
        ('y', 1 | 3 | 4) => "%Y",
        ('y', 2) => "%y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', 4) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('E', 1..=3) => "%a",
        ('E', 4) => "%A",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('S', 1) => "%1f",
        ('S', 2) => "%2f",
        ('S', 3) => "%3f",
        ('a', 1..=3) => "%p",
        ('x', 2) => "%z",
        ('x', 3) => "%:z",
        _ => return None,
    };
    Some(directive)
}
