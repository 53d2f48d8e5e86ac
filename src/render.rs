//! Turning an emitted value into the finished, styled output string.
//!
//! Every line of the value's text gets its own freshly rendered label prefix
//! and the current indent, followed by the styled line body:
//!
//! ```text
//! [build][10:30:00.123]     first line
//! [build][10:30:00.123]     second line
//! ```

use crate::clock::Clock;
use crate::color::ConsoleColor;
use crate::error::Result;
use crate::inspect;
use crate::label::LabelStack;
use crate::options::Options;
use crate::style::write_styled;
use crate::value::Value;

/// Read-only view of the formatter state a render needs.
pub struct RenderContext<'a> {
    pub options: &'a Options,
    pub labels: &'a LabelStack,
    pub indent: usize,
    pub clock: &'a dyn Clock,
}

/// Text for a truthy value: scalars as-is, structured values pretty-printed.
pub fn value_text(value: &Value, json_indent: usize) -> String {
    match value {
        Value::Structured(json) => inspect::inspect(json, json_indent),
        other => other.to_string(),
    }
}

/// Render `value` into one output string, or `None` for a falsy value that
/// must be handed to the sink untouched.
pub fn render(
    ctx: &RenderContext<'_>,
    value: &Value,
    color: ConsoleColor,
    bold: bool,
) -> Result<Option<String>> {
    if !value.is_truthy() {
        return Ok(None);
    }
    let text = value_text(value, ctx.options.json_indent);
    render_text(ctx, &text, color, bold).map(Some)
}

/// Prefix and style every `\n`-separated line of `text`.
pub fn render_text(
    ctx: &RenderContext<'_>,
    text: &str,
    color: ConsoleColor,
    bold: bool,
) -> Result<String> {
    let mut out = String::with_capacity(text.len() + 32);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&ctx.labels.render_prefix(ctx.options, ctx.clock)?);
        out.extend(std::iter::repeat_n(' ', ctx.indent));
        write_styled(&mut out, line, color, bold);
    }
    Ok(out)
}
