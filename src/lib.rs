//! `lonker`: colored, labeled and grouped console output.
//!
//! This library decorates lines written to a terminal with nestable,
//! colored labels (literal tags, dates, times, running timers), tracks an
//! indentation level for grouping, and styles message text with ANSI
//! foreground colors and bold. Structured values are pretty-printed with
//! per-type colors.
//!
//! # Example
//!
//! ```
//! use lonker::{ConsoleColor, LabelKind, Lonker, MemorySink};
//!
//! let sink = MemorySink::new();
//! let mut out = Lonker::builder().sink(sink.clone()).args(["app"]).build();
//!
//! out.open_label("deploy", Some(ConsoleColor::BrightGreen), Some(true), None);
//! out.open_label("%d ms", None, None, Some(LabelKind::Timer));
//! out.open_group(Some("uploading")).unwrap();
//! out.info("3 files").unwrap();
//! out.close_group();
//! out.close_label();
//! out.close_label();
//!
//! let lines = sink.lines();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[1].contains("3 files"));
//! ```

pub mod cli;
pub mod clock;
pub mod color;
pub mod config;
pub mod demo;
pub mod error;
pub mod formatter;
pub mod inspect;
pub mod label;
pub mod options;
pub mod pattern;
pub mod render;
pub mod sink;
pub mod style;
pub mod template;
pub mod value;

// Re-export primary API types for convenience.
pub use clock::{Clock, ManualClock, SystemClock};
pub use color::ConsoleColor;
pub use error::LonkerError;
pub use formatter::{Lonker, LonkerBuilder, default_instance};
pub use label::{Label, LabelKind, LabelStack};
pub use options::{Options, PartialOptions};
pub use sink::{Channel, ConsoleSink, MemorySink, Record, Sink, WriterSink};
pub use value::Value;
