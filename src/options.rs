//! Formatting options and partial updates.
//!
//! [`Options`] is the full record every formatter instance holds.
//! [`PartialOptions`] names a subset of fields; merging it overwrites only
//! those fields and leaves the rest untouched. Colors are not validated when
//! merged: unknown names have already resolved to
//! [`ConsoleColor::Default`](crate::ConsoleColor::Default) by the time they get here.

use serde::{Deserialize, Serialize};

use crate::color::ConsoleColor;

/// Complete formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// Spaces added per open group.
    pub group_indent: usize,
    /// Spaces per nesting level when pretty-printing structured values.
    pub json_indent: usize,
    /// Gate for the `*_verbose` emit operations.
    pub verbose: bool,

    pub label_start: String,
    pub label_start_color: ConsoleColor,
    pub label_end: String,
    pub label_end_color: ConsoleColor,
    /// Applies to both the start and the end delimiter.
    pub label_start_end_bold: bool,

    /// Placed between adjacent labels.
    pub label_separator: String,
    pub label_separator_color: ConsoleColor,
    pub label_separator_bold: bool,

    /// Placed once after the last label, before the indent.
    pub label_terminator: String,
    pub label_terminator_color: ConsoleColor,
    pub label_terminator_bold: bool,

    pub log_color: ConsoleColor,
    pub log_bold: bool,
    pub info_color: ConsoleColor,
    pub info_bold: bool,
    pub warn_color: ConsoleColor,
    pub warn_bold: bool,
    pub error_color: ConsoleColor,
    pub error_bold: bool,

    /// Color of a label opened without an explicit color.
    pub default_label_color: ConsoleColor,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            group_indent: 2,
            json_indent: 2,
            verbose: false,
            label_start: "[".to_string(),
            label_start_color: ConsoleColor::White,
            label_end: "]".to_string(),
            label_end_color: ConsoleColor::White,
            label_start_end_bold: true,
            label_separator: String::new(),
            label_separator_color: ConsoleColor::White,
            label_separator_bold: false,
            label_terminator: " ".to_string(),
            label_terminator_color: ConsoleColor::White,
            label_terminator_bold: false,
            log_color: ConsoleColor::White,
            log_bold: false,
            info_color: ConsoleColor::BrightCyan,
            info_bold: false,
            warn_color: ConsoleColor::Yellow,
            warn_bold: false,
            error_color: ConsoleColor::BrightRed,
            error_bold: true,
            default_label_color: ConsoleColor::White,
        }
    }
}

/// A subset of [`Options`] to merge over the current values.
///
/// Deserializes from TOML or JSON with every key optional.
///
/// ```
/// use lonker::{ConsoleColor, Options, PartialOptions};
///
/// let mut options = Options::default();
/// options.merge(PartialOptions {
///     label_start: Some("<".to_string()),
///     info_color: Some(ConsoleColor::Green),
///     ..PartialOptions::default()
/// });
/// assert_eq!(options.label_start, "<");
/// assert_eq!(options.label_end, "]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_indent: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_indent: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_start_color: Option<ConsoleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_end_color: Option<ConsoleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_start_end_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_separator_color: Option<ConsoleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_separator_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_terminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_terminator_color: Option<ConsoleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_terminator_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_color: Option<ConsoleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_color: Option<ConsoleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_color: Option<ConsoleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_color: Option<ConsoleColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_label_color: Option<ConsoleColor>,
}

impl PartialOptions {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `other` on top of `self`: fields set in `other` win.
    #[must_use]
    pub fn overlay(mut self, other: Self) -> Self {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            };
        }
        take!(
            group_indent,
            json_indent,
            verbose,
            label_start,
            label_start_color,
            label_end,
            label_end_color,
            label_start_end_bold,
            label_separator,
            label_separator_color,
            label_separator_bold,
            label_terminator,
            label_terminator_color,
            label_terminator_bold,
            log_color,
            log_bold,
            info_color,
            info_bold,
            warn_color,
            warn_bold,
            error_color,
            error_bold,
            default_label_color,
        );
        self
    }
}

impl Options {
    /// Overwrite the fields set in `partial`; the rest keep their values.
    pub fn merge(&mut self, partial: PartialOptions) {
        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = partial.$field {
                        self.$field = value;
                    }
                )*
            };
        }
        apply!(
            group_indent,
            json_indent,
            verbose,
            label_start,
            label_start_color,
            label_end,
            label_end_color,
            label_start_end_bold,
            label_separator,
            label_separator_color,
            label_separator_bold,
            label_terminator,
            label_terminator_color,
            label_terminator_bold,
            log_color,
            log_bold,
            info_color,
            info_bold,
            warn_color,
            warn_bold,
            error_color,
            error_bold,
            default_label_color,
        );
    }

    /// Defaults with `partial` merged on top.
    pub fn from_partial(partial: PartialOptions) -> Self {
        let mut options = Self::default();
        options.merge(partial);
        options
    }
}

/// Every field set: re-applying a snapshot reproduces it exactly.
impl From<Options> for PartialOptions {
    fn from(o: Options) -> Self {
        Self {
            group_indent: Some(o.group_indent),
            json_indent: Some(o.json_indent),
            verbose: Some(o.verbose),
            label_start: Some(o.label_start),
            label_start_color: Some(o.label_start_color),
            label_end: Some(o.label_end),
            label_end_color: Some(o.label_end_color),
            label_start_end_bold: Some(o.label_start_end_bold),
            label_separator: Some(o.label_separator),
            label_separator_color: Some(o.label_separator_color),
            label_separator_bold: Some(o.label_separator_bold),
            label_terminator: Some(o.label_terminator),
            label_terminator_color: Some(o.label_terminator_color),
            label_terminator_bold: Some(o.label_terminator_bold),
            log_color: Some(o.log_color),
            log_bold: Some(o.log_bold),
            info_color: Some(o.info_color),
            info_bold: Some(o.info_bold),
            warn_color: Some(o.warn_color),
            warn_bold: Some(o.warn_bold),
            error_color: Some(o.error_color),
            error_bold: Some(o.error_bold),
            default_label_color: Some(o.default_label_color),
        }
    }
}
