//! Single-integer printf-style templates for timer labels.
//!
//! A timer label's text such as `"%d msec"` is a template with one numeric
//! slot. Only the first placeholder (`%d`, `%i` or `%s`) receives the value;
//! `%%` is a literal percent sign and any later placeholder is left as is.
//! A template with no placeholder gets the value appended after a space.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[%dis]").expect("placeholder pattern is valid"));

/// Substitute `value` into `template`.
///
/// An empty template renders just the number.
///
/// ```
/// use lonker::template::format_integer;
///
/// assert_eq!(format_integer("%d msec", 50), "50 msec");
/// assert_eq!(format_integer("", 7), "7");
/// assert_eq!(format_integer("elapsed", 7), "elapsed 7");
/// ```
pub fn format_integer(template: &str, value: i64) -> String {
    if template.is_empty() {
        return value.to_string();
    }

    let mut consumed = false;
    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures<'_>| {
        if &caps[0] == "%%" {
            "%".to_string()
        } else if consumed {
            caps[0].to_string()
        } else {
            consumed = true;
            value.to_string()
        }
    });

    if consumed {
        rendered.into_owned()
    } else {
        format!("{rendered} {value}")
    }
}
