//! The logger: level gate, line rendering and argument rendering.
//!
//! A call renders one line through the configured sink, segment by segment:
//! date, time, level, caller, prefix, message, arguments, newline. Disabled
//! segments are left out entirely.

use std::{fmt, panic::Location, path::Path, sync::Arc};

use parking_lot::Mutex;

use crate::{
    clock::{Clock, SystemClock},
    colors::{ColorScheme, Rgb},
    error::{Error, Result},
    level::Level,
    options::{DateFormat, RenderOptions, TimeFormat},
    payload::{Field, FieldValue, Payload},
    sink::Sink,
};

const ARRAY_MARKER: &str = "   │ ";

/// Source location rendered in the caller segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl Caller<'_> {
    /// File name without its directories.
    pub fn basename(&self) -> &str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }
}

impl From<&'static Location<'static>> for Caller<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

/// A console logger with its own options and colors.
///
/// Both `options` and `colors` are public and may be changed in place on a
/// live logger. Calls on one logger are serialized, so concurrent lines never
/// interleave their segments; reconfiguring requires `&mut self` and thus
/// cannot race an in-flight call.
///
/// Payload fields are collected before the line is started, so a payload may
/// itself log through the same logger. The sink runs while the line is being
/// written and must not log through the same logger; that deadlocks.
pub struct Logger {
    pub options: RenderOptions,
    pub colors: ColorScheme,
    clock: Arc<dyn Clock>,
    lock: Mutex<()>,
}

impl Logger {
    pub fn new(options: RenderOptions, colors: ColorScheme) -> Self {
        Self {
            options,
            colors,
            clock: Arc::new(SystemClock),
            lock: Mutex::new(()),
        }
    }

    /// Replaces the clock used for the date and time segments.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn set_include_caller(&mut self, include: bool) {
        self.options.include_caller = include;
    }

    pub fn set_include_date(&mut self, include: bool) {
        self.options.include_date = include;
    }

    pub fn set_date_format(&mut self, format: DateFormat) {
        self.options.date_format = format;
    }

    pub fn set_include_time(&mut self, include: bool) {
        self.options.include_time = include;
    }

    pub fn set_time_format(&mut self, format: TimeFormat) {
        self.options.time_format = format;
    }

    pub fn set_throw_on_fatal(&mut self, throw_on_fatal: bool) {
        self.options.throw_on_fatal = throw_on_fatal;
    }

    pub fn set_minimum_level(&mut self, level: Level) {
        self.options.minimum_level = level;
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.options.prefix = prefix.into();
    }

    pub fn set_sink(&mut self, sink: Sink) {
        self.options.sink = sink;
    }

    /// Whether a line of `level` would be rendered.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.options.minimum_level
    }

    /// Print a message with level Debug.
    ///
    /// `message` is rendered as is; format it beforehand if needed.
    #[track_caller]
    pub fn debug(&self, message: &str, payload: Option<&dyn Payload>) -> Result<()> {
        self.render(Level::Debug, message, payload, Location::caller().into())
    }

    /// Print a message with level Info.
    #[track_caller]
    pub fn info(&self, message: &str, payload: Option<&dyn Payload>) -> Result<()> {
        self.render(Level::Info, message, payload, Location::caller().into())
    }

    /// Print a message with level Warning.
    #[track_caller]
    pub fn warning(&self, message: &str, payload: Option<&dyn Payload>) -> Result<()> {
        self.render(Level::Warning, message, payload, Location::caller().into())
    }

    /// Print a message with level Error.
    #[track_caller]
    pub fn error(&self, message: &str, payload: Option<&dyn Payload>) -> Result<()> {
        self.render(Level::Error, message, payload, Location::caller().into())
    }

    /// Print a message with level Fatal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fatal`] after the line is written when
    /// `throw_on_fatal` is set.
    #[track_caller]
    pub fn fatal(&self, message: &str, payload: Option<&dyn Payload>) -> Result<()> {
        self.render(Level::Fatal, message, payload, Location::caller().into())
    }

    /// Print a message with an explicit level.
    #[track_caller]
    pub fn print(&self, level: Level, message: &str, payload: Option<&dyn Payload>) -> Result<()> {
        self.render(level, message, payload, Location::caller().into())
    }

    /// Renders one line attributed to `caller`.
    ///
    /// # Errors
    ///
    /// * [`Error::MissingLevelColor`] if the color scheme lacks `level`,
    ///   before anything is written
    /// * [`Error::Sink`] if the sink fails
    /// * [`Error::Fatal`] after a fatal line when escalation is enabled
    pub fn render(
        &self,
        level: Level,
        message: &str,
        payload: Option<&dyn Payload>,
        caller: Caller<'_>,
    ) -> Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let options = &self.options;
        let colors = &self.colors;
        let level_color = colors.level(level)?;
        let fields = payload.map(|payload| payload.fields());

        let _guard = self.lock.lock();

        if options.include_date || options.include_time {
            let now = self.clock.now();

            if options.include_date {
                let date = options.date_format.render(&now);
                self.write(&format!("{} ", colors.date.paint(&date)))?;
            }

            if options.include_time {
                let time = options.time_format.render(&now);
                self.write(&format!("{} ", colors.time.paint(&time)))?;
            }
        }

        self.paint(level_color, level.tag())?;

        if options.include_caller {
            let content = format!("<{}:{}> ", caller.basename(), caller.line);
            self.paint(colors.caller, &content)?;
        }

        if !options.prefix.is_empty() {
            self.paint(colors.prefix, &format!("{}: ", options.prefix))?;
        }

        self.paint(colors.message, message)?;

        if let Some(fields) = fields {
            self.write_arguments(fields)?;
        }

        self.write("\n")?;

        if level == Level::Fatal && options.throw_on_fatal {
            return Err(Error::Fatal);
        }

        Ok(())
    }

    fn write_arguments(&self, fields: Vec<Field>) -> Result<()> {
        let colors = &self.colors;

        for field in fields {
            match field.value {
                FieldValue::Array(values) => {
                    self.paint(colors.argument_name, &format!("\n  {}=", field.name))?;
                    self.write("\n")?;

                    let Some(values) = values else {
                        self.paint(colors.argument_value, "null")?;
                        continue;
                    };

                    for value in values {
                        self.paint(colors.argument_name, ARRAY_MARKER)?;
                        self.paint(colors.argument_value, &value)?;
                        self.write("\n")?;
                    }
                }
                FieldValue::Scalar(value) => {
                    self.paint(colors.argument_name, &format!(" {}=", field.name))?;

                    if let Some(value) = value {
                        self.paint(colors.argument_value, &value)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn paint(&self, color: Rgb, text: &str) -> Result<()> {
        self.write(&color.paint(text).to_string())
    }

    fn write(&self, chunk: &str) -> Result<()> {
        self.options.sink.write(chunk)?;
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(RenderOptions::default(), ColorScheme::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("options", &self.options)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}
