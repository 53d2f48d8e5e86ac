//! Command-line argument definitions for `lonker`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::color::ConsoleColor;
use crate::error::Result;
use crate::formatter::Lonker;
use crate::label::LabelKind;
use crate::options::PartialOptions;
use crate::sink::Channel;

/// Decorate lines from stdin with colored labels, indentation and styling.
///
/// Each input line is written to stdout (or stderr for `warn`/`error`)
/// prefixed with the requested labels and indent.
#[derive(Debug, Parser)]
#[command(name = "lonker", version, about, long_about = None)]
pub struct Cli {
    /// Output channel; selects the default color and the stream.
    #[arg(short = 'c', long, value_enum, default_value_t = ChannelArg::Log)]
    pub channel: ChannelArg,

    /// Message color, overriding the channel default.
    #[arg(long, value_parser = parse_color_arg)]
    pub color: Option<ConsoleColor>,

    /// Render messages in bold.
    #[arg(short = 'b', long)]
    pub bold: bool,

    /// Literal label to prefix every line with (repeatable).
    #[arg(short = 'L', long = "label")]
    pub labels: Vec<String>,

    /// Color for labels given with `--label`.
    #[arg(long, value_parser = parse_color_arg)]
    pub label_color: Option<ConsoleColor>,

    /// Prefix lines with the current date and time.
    #[arg(long)]
    pub datetime: bool,

    /// Prefix lines with the current time of day.
    #[arg(short = 't', long)]
    pub time: bool,

    /// Date pattern for `--time` and `--datetime` labels, e.g. `"dd/MM HH:mm"`.
    #[arg(long)]
    pub time_format: Option<String>,

    /// Prefix lines with milliseconds elapsed since start.
    #[arg(short = 'T', long)]
    pub timer: bool,

    /// Template for `--timer`, e.g. `"%d ms"`.
    #[arg(long)]
    pub timer_format: Option<String>,

    /// Number of groups to open, indenting every line.
    #[arg(short = 'g', long, default_value_t = 0)]
    pub indent: usize,

    /// Only print when verbose output is enabled.
    #[arg(long)]
    pub verbose_only: bool,

    /// Enable verbose output.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a showcase of every label kind, channel and option.
    #[arg(long, conflicts_with = "completions")]
    pub demo: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_enum)]
    pub completions: Option<Shell>,
}

/// Output channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChannelArg {
    Log,
    Info,
    Warn,
    Error,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Log => Self::Log,
            ChannelArg::Info => Self::Info,
            ChannelArg::Warn => Self::Warn,
            ChannelArg::Error => Self::Error,
        }
    }
}

impl Cli {
    /// Options set by flags, to be layered over the config file.
    pub fn partial_options(&self) -> PartialOptions {
        PartialOptions {
            verbose: self.verbose.then_some(true),
            ..PartialOptions::default()
        }
    }

    /// Open the labels and groups requested by flags, in display order:
    /// date, time, timer, then literal labels.
    pub fn open_scopes(&self, out: &mut Lonker) -> Result<()> {
        let pattern = self.time_format.clone().unwrap_or_default();
        if self.datetime {
            out.open_label(pattern.clone(), None, None, Some(LabelKind::DateTime));
        }
        if self.time {
            out.open_label(pattern, None, None, Some(LabelKind::Time));
        }
        if self.timer {
            let template = self.timer_format.clone().unwrap_or_default();
            out.open_label(template, None, None, Some(LabelKind::Timer));
        }
        for label in &self.labels {
            out.open_label(label.clone(), self.label_color, None, None);
        }
        for _ in 0..self.indent {
            out.open_group(None)?;
        }
        Ok(())
    }

    /// Emit one input line according to the channel and style flags.
    pub fn emit_line(&self, out: &mut Lonker, line: &str) -> Result<()> {
        let bold = self.bold.then_some(true);
        if self.verbose_only {
            out.emit_verbose(self.channel.into(), line, self.color, bold)
        } else {
            out.emit(self.channel.into(), line, self.color, bold)
        }
    }
}

/// Parse a color name strictly; flags get an error instead of the lenient
/// fallback used for config files.
fn parse_color_arg(s: &str) -> std::result::Result<ConsoleColor, String> {
    ConsoleColor::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = ConsoleColor::ALL.iter().map(|c| c.name()).collect();
        format!("invalid color '{s}': expected one of {}", names.join(", "))
    })
}
