//! Error types for `lonker`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur while configuring or emitting.
///
/// The CLI maps [`Config`](Self::Config), [`Toml`](Self::Toml) and
/// [`TimeFormat`](Self::TimeFormat) to exit 1 and [`Io`](Self::Io) to exit 2.
#[derive(Debug, Error)]
pub enum LonkerError {
    /// Configuration error (unreadable config file, invalid flag value).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while writing to a sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A date or time label pattern could not be formatted.
    #[error("invalid time format {pattern:?}: {source}")]
    TimeFormat {
        pattern: String,
        #[source]
        source: PatternError,
    },
}

/// Why a date pattern could not be used.
#[derive(Debug, Error)]
pub enum PatternError {
    /// An unquoted letter run that is not a date token.
    #[error("unknown token {0:?}")]
    UnknownToken(String),

    /// The compiled pattern was rejected by the formatter.
    #[error(transparent)]
    Format(#[from] jiff::Error),
}

/// Shorthand for results in this crate.
pub type Result<T, E = LonkerError> = std::result::Result<T, E>;
