//! Command-line interface of the `fluff` binary.
//!
//! Renders a single log line, which makes fluff usable from shell scripts.
//! Every option can also be supplied through its environment variable, and a
//! `.env` file is honoured.

use std::path::PathBuf;

use clap::Parser;
use fluff::{DateFormat, Field, Level, TimeFormat};

/// Command-line arguments of the `fluff` binary.
#[derive(Parser, Debug)]
#[clap(author, version, about = "Print a formatted, colorized log line")]
pub struct Args {
    /// JSON file with options and colors. Flags override its values.
    #[clap(short, long, env = "FLUFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Minimum level; lines below it are not printed.
    #[clap(short = 'l', long = "level", env = "FLUFF_LEVEL")]
    pub minimum_level: Option<Level>,

    /// Prefix rendered as "<prefix>: " before the message.
    #[clap(short, long, env = "FLUFF_PREFIX")]
    pub prefix: Option<String>,

    /// Include the date.
    #[clap(long)]
    pub date: bool,

    /// Date format: iso, unix or short.
    #[clap(long, env = "FLUFF_DATE_FORMAT")]
    pub date_format: Option<DateFormat>,

    /// Leave out the time.
    #[clap(long)]
    pub no_time: bool,

    /// Time format: latin.
    #[clap(long, env = "FLUFF_TIME_FORMAT")]
    pub time_format: Option<TimeFormat>,

    /// Include the source location of the call.
    #[clap(long)]
    pub caller: bool,

    /// Exit normally after a fatal line.
    #[clap(long)]
    pub no_throw: bool,

    /// Scalar argument appended to the line, as NAME=VALUE.
    #[clap(short, long = "arg", value_parser = parse_scalar)]
    pub args: Vec<Field>,

    /// Array argument appended to the line, as NAME=V1,V2,...
    #[clap(long = "list", value_parser = parse_list)]
    pub lists: Vec<Field>,

    /// Level of the line.
    pub level: Level,

    /// Message of the line.
    pub message: String,
}

fn split_pair(s: &str) -> Result<(&str, &str), String> {
    s.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))
}

fn parse_scalar(s: &str) -> Result<Field, String> {
    let (name, value) = split_pair(s)?;
    Ok(Field::scalar(name, value))
}

fn parse_list(s: &str) -> Result<Field, String> {
    let (name, values) = split_pair(s)?;
    let values = values.split(',').filter(|v| !v.is_empty());
    Ok(Field::array(name, values))
}
