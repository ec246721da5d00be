//! Routes records of the `log` crate through a [`Logger`].

use std::{io::Write, sync::Arc};

use log::{Log, Metadata, Record, SetLoggerError};
use parking_lot::RwLock;

use crate::{
    level::Level,
    logger::{Caller, Logger},
};

/// A `log::Log` implementation backed by a fluff [`Logger`].
///
/// `log` has no fatal level, so records never escalate. Rendering errors
/// cannot be returned through `log::Log` and are reported on stderr instead.
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<RwLock<Logger>>,
}

impl LogBridge {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: Arc::new(RwLock::new(logger)),
        }
    }

    /// Handle to the wrapped logger, for reconfiguration after install.
    pub fn logger(&self) -> Arc<RwLock<Logger>> {
        self.logger.clone()
    }

    /// Installs the bridge as the global `log` logger.
    ///
    /// The `log` filter is opened fully and gating is left to the wrapped
    /// logger, so changing its minimum level through the returned handle
    /// takes effect for the `log` macros too.
    ///
    /// # Errors
    ///
    /// Returns an error if a `log` logger was already installed.
    pub fn install(logger: Logger) -> Result<Arc<RwLock<Logger>>, SetLoggerError> {
        let bridge = Self::new(logger);
        let handle = bridge.logger();

        log::set_boxed_logger(Box::new(bridge))?;
        log::set_max_level(log::LevelFilter::Trace);

        Ok(handle)
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.logger.read().enabled(metadata.level().into())
    }

    fn log(&self, record: &Record) {
        let level = Level::from(record.level());
        let caller = Caller {
            file: record.file().unwrap_or("unknown"),
            line: record.line().unwrap_or(0),
        };
        let message = record.args().to_string();

        if let Err(e) = self.logger.read().render(level, &message, None, caller) {
            let _ = writeln!(std::io::stderr(), "fluff: failed to render log record: {e}");
        }
    }

    fn flush(&self) {
        if let Err(e) = self.logger.read().options.sink.flush() {
            let _ = writeln!(std::io::stderr(), "fluff: failed to flush sink: {e}");
        }
    }
}
