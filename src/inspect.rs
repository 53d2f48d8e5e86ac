//! Colorized pretty-printing of structured values.
//!
//! Arrays and objects are laid out the way an interactive inspector shows
//! them:
//!
//! ```text
//! [
//!   {
//!     name: 'value',
//!     ratio: 2.5,
//!     tags: [ 'andy', 'rocks' ]
//!   }
//! ]
//! ```
//!
//! A container whose entries are all scalars stays on one line when its plain
//! rendering fits in [`INLINE_WIDTH`] columns. Strings are green and single
//! quoted, numbers and booleans yellow, `null` bold.

use serde_json::{Map, Value as Json};

use crate::color::ConsoleColor;
use crate::style;
use crate::value::float_text;

/// Widest single-line rendering of a container, in columns.
pub const INLINE_WIDTH: usize = 72;

/// Render `value` with `indent` spaces per nesting level.
///
/// ```
/// use serde_json::json;
///
/// let text = lonker::inspect::inspect(&json!([1, 2]), 2);
/// assert_eq!(text, "[ \x1b[33m1\x1b[39m, \x1b[33m2\x1b[39m ]");
/// ```
pub fn inspect(value: &Json, indent: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent, 0, true);
    out
}

/// Render `value` without colors, same layout.
pub fn inspect_plain(value: &Json, indent: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, value, indent, 0, false);
    out
}

fn write_value(out: &mut String, value: &Json, indent: usize, depth: usize, color: bool) {
    match value {
        Json::Array(items) => write_array(out, items, indent, depth, color),
        Json::Object(map) => write_object(out, map, indent, depth, color),
        scalar => out.push_str(&scalar_text(scalar, color)),
    }
}

fn write_array(out: &mut String, items: &[Json], indent: usize, depth: usize, color: bool) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    if let Some(inline) = inline_entries(items.iter().map(|v| (None, v)), color) {
        out.push_str("[ ");
        out.push_str(&inline);
        out.push_str(" ]");
        return;
    }

    out.push('[');
    let last = items.len() - 1;
    for (i, item) in items.iter().enumerate() {
        newline(out, indent, depth + 1);
        write_value(out, item, indent, depth + 1, color);
        if i != last {
            out.push(',');
        }
    }
    newline(out, indent, depth);
    out.push(']');
}

fn write_object(
    out: &mut String,
    map: &Map<String, Json>,
    indent: usize,
    depth: usize,
    color: bool,
) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }

    if let Some(inline) = inline_entries(map.iter().map(|(k, v)| (Some(k.as_str()), v)), color)
    {
        out.push_str("{ ");
        out.push_str(&inline);
        out.push_str(" }");
        return;
    }

    out.push('{');
    let last = map.len() - 1;
    for (i, (key, item)) in map.iter().enumerate() {
        newline(out, indent, depth + 1);
        out.push_str(&key_text(key));
        out.push_str(": ");
        write_value(out, item, indent, depth + 1, color);
        if i != last {
            out.push(',');
        }
    }
    newline(out, indent, depth);
    out.push('}');
}

/// Join scalar entries on one line, or `None` if any entry is a container or
/// the plain text would exceed [`INLINE_WIDTH`].
fn inline_entries<'a, I>(entries: I, color: bool) -> Option<String>
where
    I: Iterator<Item = (Option<&'a str>, &'a Json)>,
{
    let mut plain_width = 4; // brackets and their inner spaces
    let mut parts = Vec::new();

    for (key, value) in entries {
        if value.is_array() || value.is_object() {
            return None;
        }
        let key = key.map(key_text);
        let plain = scalar_text(value, false);
        plain_width += plain.chars().count() + key.as_ref().map_or(0, |k| k.chars().count() + 2);
        if !parts.is_empty() {
            plain_width += 2;
        }
        if plain_width > INLINE_WIDTH {
            return None;
        }
        let rendered = if color { scalar_text(value, true) } else { plain };
        parts.push(match key {
            Some(k) => format!("{k}: {rendered}"),
            None => rendered,
        });
    }

    Some(parts.join(", "))
}

fn newline(out: &mut String, indent: usize, depth: usize) {
    out.push('\n');
    out.extend(std::iter::repeat_n(' ', indent * depth));
}

fn scalar_text(value: &Json, color: bool) -> String {
    let (text, paint) = match value {
        Json::String(s) => (quote(s), Some(ConsoleColor::Green)),
        Json::Number(n) => {
            let text = n
                .as_i64()
                .map(|i| i.to_string())
                .or_else(|| n.as_u64().map(|u| u.to_string()))
                .unwrap_or_else(|| float_text(n.as_f64().unwrap_or(f64::NAN)));
            (text, Some(ConsoleColor::Yellow))
        }
        Json::Bool(b) => (b.to_string(), Some(ConsoleColor::Yellow)),
        Json::Null => {
            return if color {
                style::bold("null")
            } else {
                "null".to_string()
            };
        }
        // containers are never scalars; fall back to compact JSON
        other => (other.to_string(), None),
    };

    match paint {
        Some(c) if color => style::styled(&text, c, false),
        _ => text,
    }
}

/// Single quotes unless the text contains one; then double quotes, then
/// backticks, and only escape when all three occur.
fn quote(s: &str) -> String {
    let delim = if !s.contains('\'') {
        '\''
    } else if !s.contains('"') {
        '"'
    } else if !s.contains('`') && !s.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for ch in s.chars() {
        match ch {
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push(delim);
    out
}

fn key_text(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_ident { key.to_string() } else { quote(key) }
}
