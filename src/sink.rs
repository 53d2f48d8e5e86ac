//! Output sinks.
//!
//! A sink receives one finished [`Value`] per emit along with the
//! [`Channel`] it was emitted on. Formatted output always arrives as
//! [`Value::Str`]; falsy values arrive exactly as the caller passed them.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::color::ConsoleColor;
use crate::options::Options;
use crate::value::Value;

/// The four emit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Log,
    Info,
    Warn,
    Error,
}

impl Channel {
    /// Default color and bold flag for this channel.
    pub const fn style(self, options: &Options) -> (ConsoleColor, bool) {
        match self {
            Self::Log => (options.log_color, options.log_bold),
            Self::Info => (options.info_color, options.info_bold),
            Self::Warn => (options.warn_color, options.warn_bold),
            Self::Error => (options.error_color, options.error_bold),
        }
    }

    /// Whether the console sink writes this channel to stderr.
    pub const fn is_stderr(self) -> bool {
        matches!(self, Self::Warn | Self::Error)
    }

    /// Parse a channel name, case-insensitive.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "log" => Some(Self::Log),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Destination for emitted values.
pub trait Sink: Send {
    fn write(&mut self, channel: Channel, value: &Value) -> io::Result<()>;
}

/// Writes to stdout (log, info) and stderr (warn, error), one line per emit.
///
/// Values print through their `Display` text, so an absent value prints an
/// empty line rather than a placeholder word. A closed pipe is not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write(&mut self, channel: Channel, value: &Value) -> io::Result<()> {
        let result = if channel.is_stderr() {
            writeln!(io::stderr().lock(), "{value}")
        } else {
            writeln!(io::stdout().lock(), "{value}")
        };
        match result {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        }
    }
}

/// One captured emit.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub channel: Channel,
    pub value: Value,
}

/// Collects emits in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything captured so far.
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Captured values rendered as text, in emit order.
    pub fn lines(&self) -> Vec<String> {
        self.records().iter().map(|r| r.value.to_string()).collect()
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Sink for MemorySink {
    fn write(&mut self, channel: Channel, value: &Value) -> io::Result<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Record {
                channel,
                value: value.clone(),
            });
        Ok(())
    }
}

/// Writes every channel to one writer, e.g. a `Vec<u8>` or a file, with the
/// same line text as [`ConsoleSink`].
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&mut self, _channel: Channel, value: &Value) -> io::Result<()> {
        writeln!(self.inner, "{value}")
    }
}
