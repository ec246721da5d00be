//! Logger configuration from JSON files and environment variables.

use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    colors::ColorScheme,
    error::{Error, Result},
    level::Level,
    logger::Logger,
    options::RenderOptions,
};

/// Environment variables read by [`Config::apply_env`].
pub const ENV_LEVEL: &str = "FLUFF_LEVEL";
pub const ENV_PREFIX: &str = "FLUFF_PREFIX";
pub const ENV_INCLUDE_CALLER: &str = "FLUFF_INCLUDE_CALLER";
pub const ENV_INCLUDE_DATE: &str = "FLUFF_INCLUDE_DATE";
pub const ENV_DATE_FORMAT: &str = "FLUFF_DATE_FORMAT";
pub const ENV_INCLUDE_TIME: &str = "FLUFF_INCLUDE_TIME";
pub const ENV_TIME_FORMAT: &str = "FLUFF_TIME_FORMAT";
pub const ENV_THROW_ON_FATAL: &str = "FLUFF_THROW_ON_FATAL";
pub const ENV_COLOR_DATE: &str = "FLUFF_COLOR_DATE";
pub const ENV_COLOR_TIME: &str = "FLUFF_COLOR_TIME";
pub const ENV_COLOR_CALLER: &str = "FLUFF_COLOR_CALLER";
pub const ENV_COLOR_PREFIX: &str = "FLUFF_COLOR_PREFIX";
pub const ENV_COLOR_MESSAGE: &str = "FLUFF_COLOR_MESSAGE";
pub const ENV_COLOR_ARGUMENT_NAME: &str = "FLUFF_COLOR_ARGUMENT_NAME";
pub const ENV_COLOR_ARGUMENT_VALUE: &str = "FLUFF_COLOR_ARGUMENT_VALUE";

/// Variable holding the tag color of `level`, e.g. `FLUFF_COLOR_WARNING`.
pub fn level_color_var(level: Level) -> String {
    format!("FLUFF_COLOR_{}", level.as_str().to_ascii_uppercase())
}

/// Options and colors of a logger, as stored on disk.
///
/// ```json
/// {
///   "options": { "minimum_level": "info", "prefix": "api", "include_date": true },
///   "colors": { "message": [255, 255, 255] }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub options: RenderOptions,
    pub colors: ColorScheme,
}

impl Config {
    /// Reads a JSON config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Overrides options and colors with the `FLUFF_*` environment variables
    /// that are set. Colors are given as `#rrggbb` or `r,g,b`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an unrecognized value.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_vars(|key| env::var(key).ok())
    }

    /// Like [`Config::apply_env`], reading variables through `lookup`.
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let options = &mut self.options;

        if let Some(level) = lookup(ENV_LEVEL) {
            options.minimum_level = level.parse()?;
        }
        if let Some(prefix) = lookup(ENV_PREFIX) {
            options.prefix = prefix;
        }
        if let Some(format) = lookup(ENV_DATE_FORMAT) {
            options.date_format = format.parse()?;
        }
        if let Some(format) = lookup(ENV_TIME_FORMAT) {
            options.time_format = format.parse()?;
        }

        for (key, flag) in [
            (ENV_INCLUDE_CALLER, &mut options.include_caller),
            (ENV_INCLUDE_DATE, &mut options.include_date),
            (ENV_INCLUDE_TIME, &mut options.include_time),
            (ENV_THROW_ON_FATAL, &mut options.throw_on_fatal),
        ] {
            if let Some(value) = lookup(key) {
                *flag = parse_flag(key, &value)?;
            }
        }

        let colors = &mut self.colors;

        for (key, color) in [
            (ENV_COLOR_DATE, &mut colors.date),
            (ENV_COLOR_TIME, &mut colors.time),
            (ENV_COLOR_CALLER, &mut colors.caller),
            (ENV_COLOR_PREFIX, &mut colors.prefix),
            (ENV_COLOR_MESSAGE, &mut colors.message),
            (ENV_COLOR_ARGUMENT_NAME, &mut colors.argument_name),
            (ENV_COLOR_ARGUMENT_VALUE, &mut colors.argument_value),
        ] {
            if let Some(value) = lookup(key) {
                *color = value.parse()?;
            }
        }

        for level in Level::ALL {
            if let Some(value) = lookup(&level_color_var(level)) {
                colors.set_level(level, value.parse()?);
            }
        }

        Ok(())
    }

    pub fn into_logger(self) -> Logger {
        Logger::new(self.options, self.colors)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidSetting {
            key,
            value: value.to_string(),
        }),
    }
}
