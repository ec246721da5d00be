//! Error types for the fluff logger.
//!
//! Logging is not infallible: a misconfigured logger fails the call that logs.
//! Fatal escalation is reported through the same channel, but as its own
//! variant so callers can tell "logging failed" apart from "the line was
//! written and a shutdown was requested".

use std::{io, path::PathBuf};

use crate::level::Level;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A level name that is not one of the five known levels.
    #[error("Invalid level: {0}")]
    UnknownLevel(String),

    #[error("DateFormat not supported: {0}")]
    UnsupportedDateFormat(String),

    #[error("TimeFormat not supported: {0}")]
    UnsupportedTimeFormat(String),

    /// The color scheme has no entry for a level being rendered.
    #[error("No color configured for level {0}")]
    MissingLevelColor(Level),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Invalid boolean or other malformed configuration value.
    #[error("Invalid value for {key}: {value}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The sink refused a write.
    #[error("Sink write failed: {0}")]
    Sink(#[from] io::Error),

    /// A fatal line was written and the logger is configured to escalate.
    #[error("Fatal error occurred.")]
    Fatal,
}

impl Error {
    /// Whether this is a fatal escalation rather than a logging failure.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Fatal)
    }
}
