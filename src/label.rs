//! Labels and the label stack.
//!
//! A label is a bracketed prefix segment such as `[build]`, `[10:30:00.123]`
//! or `[152 msec]`. Open labels form a stack: every output line is prefixed
//! with all of them, oldest leftmost, and closing removes the newest.
//! Computed labels (date, time, timer) are re-rendered for every line.

use jiff::{Timestamp, Zoned};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::color::ConsoleColor;
use crate::error::{LonkerError, Result};
use crate::options::Options;
use crate::style::{styled, write_styled};
use crate::template;

/// Pattern for [`LabelKind::DateTime`] labels with empty text (`Jan 15 10:30:00`).
pub const DEFAULT_DATETIME_FORMAT: &str = "MMM dd HH:mm:ss";

/// Pattern for [`LabelKind::Time`] labels with empty text (`10:30:00.123`).
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm:ss.SSS";

/// How a label's text is turned into displayed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    /// Text shown verbatim.
    #[default]
    #[serde(alias = "string")]
    Literal,
    /// Text is a date pattern (see [`crate::pattern`]) for the current date and time.
    DateTime,
    /// Text is a date pattern for the current time of day.
    Time,
    /// Text is a template for milliseconds elapsed since the label was opened.
    Timer,
}

/// One open label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub color: ConsoleColor,
    pub bold: bool,
    pub kind: LabelKind,
    /// When the label was opened; timers count from here.
    pub opened_at: Timestamp,
}

impl Label {
    /// The label's displayed content at `now`, before delimiters and styling.
    pub fn content(&self, now: &Zoned) -> Result<String> {
        match self.kind {
            LabelKind::Literal => Ok(self.text.clone()),
            LabelKind::DateTime => format_time(now, self.pattern_or(DEFAULT_DATETIME_FORMAT)),
            LabelKind::Time => format_time(now, self.pattern_or(DEFAULT_TIME_FORMAT)),
            LabelKind::Timer => {
                let elapsed = now.timestamp().as_millisecond() - self.opened_at.as_millisecond();
                Ok(template::format_integer(&self.text, elapsed))
            }
        }
    }

    /// Content wrapped in the configured start and end delimiters, styled.
    pub fn render(&self, options: &Options, now: &Zoned) -> Result<String> {
        let content = self.content(now)?;
        let mut out = String::new();
        write_styled(
            &mut out,
            &options.label_start,
            options.label_start_color,
            options.label_start_end_bold,
        );
        write_styled(&mut out, &content, self.color, self.bold);
        write_styled(
            &mut out,
            &options.label_end,
            options.label_end_color,
            options.label_start_end_bold,
        );
        Ok(out)
    }

    fn pattern_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.text.is_empty() {
            default
        } else {
            &self.text
        }
    }
}

fn format_time(now: &Zoned, pattern: &str) -> Result<String> {
    crate::pattern::format(pattern, now).map_err(|source| LonkerError::TimeFormat {
        pattern: pattern.to_string(),
        source,
    })
}

/// Open labels, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelStack {
    labels: Vec<Label>,
}

impl LabelStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: Label) {
        self.labels.push(label);
    }

    /// Remove and return the newest label, or `None` if nothing is open.
    pub fn pop(&mut self) -> Option<Label> {
        self.labels.pop()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Open labels, oldest first.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The full styled prefix: every label joined by the separator, then the
    /// terminator. Empty when no label is open.
    pub fn render_prefix(&self, options: &Options, clock: &dyn Clock) -> Result<String> {
        if self.labels.is_empty() {
            return Ok(String::new());
        }

        let now = clock.now();
        let separator = styled(
            &options.label_separator,
            options.label_separator_color,
            options.label_separator_bold,
        );

        let mut out = String::new();
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                out.push_str(&separator);
            }
            out.push_str(&label.render(options, &now)?);
        }
        write_styled(
            &mut out,
            &options.label_terminator,
            options.label_terminator_color,
            options.label_terminator_bold,
        );
        Ok(out)
    }
}
