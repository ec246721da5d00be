//! Render options of a logger.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{error::Error, level::Level, sink::Sink};

/// Format of the date segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// ISO date. Example: 2017-04-20
    #[serde(alias = "ISO")]
    Iso,
    /// Seconds since the Unix epoch. Example: 1492702320
    Unix,
    /// Day first. Example: 14/10/2012
    #[default]
    Short,
}

impl DateFormat {
    pub fn render(self, now: &DateTime<Local>) -> String {
        match self {
            DateFormat::Iso => now.format("%Y-%m-%d").to_string(),
            DateFormat::Unix => now.timestamp().to_string(),
            DateFormat::Short => now.format("%d/%m/%Y").to_string(),
        }
    }
}

impl FromStr for DateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(DateFormat::Iso),
            "unix" => Ok(DateFormat::Unix),
            "short" => Ok(DateFormat::Short),
            _ => Err(Error::UnsupportedDateFormat(s.to_string())),
        }
    }
}

/// Format of the time segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFormat {
    /// Twelve-hour clock with meridiem. Example: 02:07PM
    #[default]
    Latin,
}

impl TimeFormat {
    pub fn render(self, now: &DateTime<Local>) -> String {
        match self {
            TimeFormat::Latin => now.format("%I:%M%p").to_string(),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin" => Ok(TimeFormat::Latin),
            _ => Err(Error::UnsupportedTimeFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DateFormat::Iso => "iso",
            DateFormat::Unix => "unix",
            DateFormat::Short => "short",
        })
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("latin")
    }
}

/// Controls which segments are rendered, how, and where they go.
///
/// Every field may be changed at any time, including on a logger that is
/// already in use.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render `<file:line>` of the call site.
    pub include_caller: bool,
    pub include_date: bool,
    pub date_format: DateFormat,
    pub include_time: bool,
    pub time_format: TimeFormat,
    /// Escalate after a fatal line has been written.
    pub throw_on_fatal: bool,
    /// Lines below this level are dropped.
    pub minimum_level: Level,
    /// Rendered as `<prefix>: ` when non-empty.
    pub prefix: String,
    #[serde(skip)]
    pub sink: Sink,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_caller: false,
            include_date: false,
            date_format: DateFormat::Short,
            include_time: true,
            time_format: TimeFormat::Latin,
            throw_on_fatal: true,
            minimum_level: Level::Warning,
            prefix: String::new(),
            sink: Sink::default(),
        }
    }
}
