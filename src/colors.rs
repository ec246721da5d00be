//! Color scheme of a logger.
//!
//! Colors are plain RGB triples painted with `colored`'s true-color support.
//! Whether escape codes are emitted at all is decided by `colored`, which
//! honours `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`.

use std::{collections::BTreeMap, fmt, str::FromStr};

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::Error, level::Level};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn paint(self, text: &str) -> ColoredString {
        text.truecolor(self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parses `#rrggbb` or `r,g,b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(invalid());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        match channels[..] {
            [r, g, b] => Ok(Rgb(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

const LIGHT: Rgb = Rgb(236, 236, 236);
const GREY: Rgb = Rgb(140, 140, 140);

/// Colors for every segment of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub date: Rgb,
    pub time: Rgb,
    /// Color of the level tag, per level. Entries given in a config are
    /// layered over the defaults, so every level keeps a color.
    #[serde(deserialize_with = "merge_default_levels")]
    pub levels: BTreeMap<Level, Rgb>,
    pub caller: Rgb,
    pub prefix: Rgb,
    pub message: Rgb,
    pub argument_name: Rgb,
    pub argument_value: Rgb,
}

impl ColorScheme {
    /// Looks up the tag color of `level`.
    pub fn level(&self, level: Level) -> Result<Rgb, Error> {
        self.levels
            .get(&level)
            .copied()
            .ok_or(Error::MissingLevelColor(level))
    }

    pub fn set_level(&mut self, level: Level, color: Rgb) {
        self.levels.insert(level, color);
    }
}

fn merge_default_levels<'de, D>(deserializer: D) -> Result<BTreeMap<Level, Rgb>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut levels = ColorScheme::default().levels;
    levels.extend(BTreeMap::<Level, Rgb>::deserialize(deserializer)?);
    Ok(levels)
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            date: LIGHT,
            time: LIGHT,
            levels: BTreeMap::from([
                (Level::Debug, Rgb(94, 95, 254)),
                (Level::Info, Rgb(98, 254, 218)),
                (Level::Warning, Rgb(199, 234, 121)),
                (Level::Error, Rgb(254, 95, 136)),
                (Level::Fatal, Rgb(226, 42, 68)),
            ]),
            caller: GREY,
            prefix: GREY,
            message: LIGHT,
            argument_name: GREY,
            argument_value: LIGHT,
        }
    }
}
