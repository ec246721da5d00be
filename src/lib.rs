//! Fluff: a configurable, colorized console logger.
//!
//! A [`Logger`] renders one line per call from a level, a message and an
//! optional structured [`Payload`]:
//!
//! ```text
//! 14/10/2012 02:07PM WARN <main.rs:12> api: slow request took=1200
//! ```
//!
//! Which segments appear, their formats and the minimum level live in
//! [`RenderOptions`]; colors live in [`ColorScheme`]. Both can be changed on a
//! live logger.

pub mod bridge;
pub mod clock;
pub mod colors;
pub mod config;
pub mod error;
pub mod facade;
pub mod level;
pub mod logger;
pub mod options;
pub mod payload;
pub mod sink;

pub use bridge::LogBridge;
pub use clock::{Clock, FixedClock, SystemClock};
pub use colors::{ColorScheme, Rgb};
pub use config::Config;
pub use error::{Error, Result};
pub use facade::{debug, error, fatal, info, logger, logger_mut, set_logger, warning};
pub use level::Level;
pub use logger::{Caller, Logger};
pub use options::{DateFormat, RenderOptions, TimeFormat};
pub use payload::{Field, FieldValue, Payload};
pub use sink::{Buffer, Sink};
