//! Process-wide default logger.
//!
//! The free functions forward to a single shared [`Logger`] without altering
//! their arguments. Prefer passing a `Logger` explicitly; this exists for
//! ergonomic top-level calls.

use once_cell::sync::Lazy;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{error::Result, logger::Logger, payload::Payload};

static LOGGER: Lazy<RwLock<Logger>> = Lazy::new(|| RwLock::new(Logger::default()));

/// Shared access to the default logger.
pub fn logger() -> RwLockReadGuard<'static, Logger> {
    LOGGER.read()
}

/// Exclusive access to the default logger, for reconfiguration.
///
/// Logging through the facade blocks while the guard is held.
pub fn logger_mut() -> RwLockWriteGuard<'static, Logger> {
    LOGGER.write()
}

/// Replaces the default logger, returning the previous one.
pub fn set_logger(logger: Logger) -> Logger {
    std::mem::replace(&mut *LOGGER.write(), logger)
}

#[track_caller]
pub fn debug(message: &str, payload: Option<&dyn Payload>) -> Result<()> {
    logger().debug(message, payload)
}

#[track_caller]
pub fn info(message: &str, payload: Option<&dyn Payload>) -> Result<()> {
    logger().info(message, payload)
}

#[track_caller]
pub fn warning(message: &str, payload: Option<&dyn Payload>) -> Result<()> {
    logger().warning(message, payload)
}

#[track_caller]
pub fn error(message: &str, payload: Option<&dyn Payload>) -> Result<()> {
    logger().error(message, payload)
}

#[track_caller]
pub fn fatal(message: &str, payload: Option<&dyn Payload>) -> Result<()> {
    logger().fatal(message, payload)
}
