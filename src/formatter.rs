//! The formatter instance.
//!
//! A [`Lonker`] owns its options, label stack and indent level exclusively;
//! separate instances never share state. Every operation runs to completion
//! synchronously, and emitting only reads labels and indent.

use std::ffi::OsString;

use crate::clock::{Clock, SystemClock};
use crate::color::ConsoleColor;
use crate::error::Result;
use crate::label::{Label, LabelKind, LabelStack};
use crate::options::{Options, PartialOptions};
use crate::render::{self, RenderContext};
use crate::sink::{Channel, ConsoleSink, Sink};
use crate::value::Value;

/// Command-line flag that forces verbose output on at construction.
pub const VERBOSE_FLAG: &str = "--verbose";

/// Colored, labeled, grouped console output.
///
/// ```
/// use lonker::{Lonker, MemorySink};
///
/// let sink = MemorySink::new();
/// let mut out = Lonker::builder().sink(sink.clone()).args(Vec::<String>::new()).build();
///
/// out.open_label("build", None, None, None);
/// out.log("compiling").unwrap();
/// out.close_label();
///
/// assert!(sink.lines()[0].contains("build"));
/// assert!(sink.lines()[0].ends_with("compiling\x1b[39m"));
/// ```
pub struct Lonker {
    options: Options,
    labels: LabelStack,
    indent: usize,
    sink: Box<dyn Sink>,
    clock: Box<dyn Clock>,
}

impl Lonker {
    /// Default options, console output, system clock, process arguments.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Like [`Lonker::new`] with `partial` merged over the defaults.
    pub fn with_options(partial: PartialOptions) -> Self {
        Self::builder().options(partial).build()
    }

    pub fn builder() -> LonkerBuilder {
        LonkerBuilder::new()
    }

    /// Current options.
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Merge `partial` into the options and return the result; `None` only
    /// returns the current options.
    pub fn set_options(&mut self, partial: Option<PartialOptions>) -> Options {
        if let Some(partial) = partial {
            self.options.merge(partial);
        }
        self.options.clone()
    }

    /// Current indent in spaces.
    pub const fn indent(&self) -> usize {
        self.indent
    }

    /// Open labels, oldest first.
    pub fn labels(&self) -> &[Label] {
        self.labels.labels()
    }

    // -- emit channels ------------------------------------------------------

    /// Emit on `channel`; `color` and `bold` override the channel defaults.
    ///
    /// Falsy values (absent, `""`, `0`, `false`) skip formatting entirely and
    /// reach the sink unchanged.
    pub fn emit(
        &mut self,
        channel: Channel,
        value: impl Into<Value>,
        color: Option<ConsoleColor>,
        bold: Option<bool>,
    ) -> Result<()> {
        let value = value.into();
        let (default_color, default_bold) = channel.style(&self.options);
        let ctx = RenderContext {
            options: &self.options,
            labels: &self.labels,
            indent: self.indent,
            clock: self.clock.as_ref(),
        };
        match render::render(
            &ctx,
            &value,
            color.unwrap_or(default_color),
            bold.unwrap_or(default_bold),
        )? {
            Some(text) => self.sink.write(channel, &Value::Str(text))?,
            None => self.sink.write(channel, &value)?,
        }
        Ok(())
    }

    /// [`emit`](Self::emit), only when the verbose option is on.
    pub fn emit_verbose(
        &mut self,
        channel: Channel,
        value: impl Into<Value>,
        color: Option<ConsoleColor>,
        bold: Option<bool>,
    ) -> Result<()> {
        if self.options.verbose {
            self.emit(channel, value, color, bold)
        } else {
            Ok(())
        }
    }

    pub fn log(&mut self, value: impl Into<Value>) -> Result<()> {
        self.emit(Channel::Log, value, None, None)
    }

    pub fn info(&mut self, value: impl Into<Value>) -> Result<()> {
        self.emit(Channel::Info, value, None, None)
    }

    pub fn warn(&mut self, value: impl Into<Value>) -> Result<()> {
        self.emit(Channel::Warn, value, None, None)
    }

    pub fn error(&mut self, value: impl Into<Value>) -> Result<()> {
        self.emit(Channel::Error, value, None, None)
    }

    pub fn verbose(&mut self, value: impl Into<Value>) -> Result<()> {
        self.emit_verbose(Channel::Log, value, None, None)
    }

    pub fn info_verbose(&mut self, value: impl Into<Value>) -> Result<()> {
        self.emit_verbose(Channel::Info, value, None, None)
    }

    pub fn warn_verbose(&mut self, value: impl Into<Value>) -> Result<()> {
        self.emit_verbose(Channel::Warn, value, None, None)
    }

    pub fn error_verbose(&mut self, value: impl Into<Value>) -> Result<()> {
        self.emit_verbose(Channel::Error, value, None, None)
    }

    // -- labels -------------------------------------------------------------

    /// Push a label. Defaults: the `default_label_color` option, not bold,
    /// [`LabelKind::Literal`]. Timers start counting now.
    pub fn open_label(
        &mut self,
        text: impl Into<String>,
        color: Option<ConsoleColor>,
        bold: Option<bool>,
        kind: Option<LabelKind>,
    ) {
        self.labels.push(Label {
            text: text.into(),
            color: color.unwrap_or(self.options.default_label_color),
            bold: bold.unwrap_or(false),
            kind: kind.unwrap_or_default(),
            opened_at: self.clock.now().timestamp(),
        });
    }

    /// Pop the newest label; `None` when no label is open.
    pub fn close_label(&mut self) -> Option<Label> {
        self.labels.pop()
    }

    // -- groups -------------------------------------------------------------

    /// Emit `text` (if non-empty) at the current indent, then indent further.
    pub fn open_group(&mut self, text: Option<&str>) -> Result<()> {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.log(text)?;
        }
        self.indent += self.options.group_indent;
        Ok(())
    }

    /// Outdent by one group step, never below zero. Returns the new indent.
    pub fn close_group(&mut self) -> usize {
        self.indent = self.indent.saturating_sub(self.options.group_indent);
        self.indent
    }
}

impl Default for Lonker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Lonker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lonker")
            .field("options", &self.options)
            .field("labels", &self.labels)
            .field("indent", &self.indent)
            .finish_non_exhaustive()
    }
}

/// Stepwise construction of a [`Lonker`] with injected sink, clock and
/// arguments.
pub struct LonkerBuilder {
    options: PartialOptions,
    sink: Option<Box<dyn Sink>>,
    clock: Option<Box<dyn Clock>>,
    args: Option<Vec<OsString>>,
}

impl LonkerBuilder {
    fn new() -> Self {
        Self {
            options: PartialOptions::default(),
            sink: None,
            clock: None,
            args: None,
        }
    }

    /// Options merged over the defaults. Repeated calls layer on each other.
    #[must_use]
    pub fn options(mut self, partial: PartialOptions) -> Self {
        self.options = self.options.overlay(partial);
        self
    }

    /// Output destination; defaults to [`ConsoleSink`].
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Time source; defaults to [`SystemClock`].
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Arguments checked for [`VERBOSE_FLAG`]; defaults to the process
    /// arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> Lonker {
        let mut options = Options::from_partial(self.options);
        let args = self.args.unwrap_or_else(|| std::env::args_os().collect());
        if args.iter().any(|a| a == VERBOSE_FLAG) {
            options.verbose = true;
        }

        Lonker {
            options,
            labels: LabelStack::new(),
            indent: 0,
            sink: self.sink.unwrap_or_else(|| Box::new(ConsoleSink)),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        }
    }
}

/// A fresh default-configured instance writing to the console.
///
/// This is a factory, not a shared global: every call returns an independent
/// instance.
pub fn default_instance() -> Lonker {
    Lonker::new()
}
