//! A process-wide default logger for code that has no handle of its own.
//!
//! Uses `OnceLock` so the logger is installed exactly once, even if several
//! entry points race to call [`init`]. Reading it before `init` installs a
//! default logger, after which `init` no longer has any effect.

use crate::logger::Logger;
use std::fmt::Display;
use std::sync::{Arc, OnceLock};

static GLOBAL_LOGGER: OnceLock<Arc<Logger>> = OnceLock::new();

/// Installs `logger` as the process-wide logger.
///
/// Returns `false` (and drops `logger`) if one was already installed.
pub fn init(logger: Logger) -> bool {
    GLOBAL_LOGGER.set(Arc::new(logger)).is_ok()
}

/// The process-wide logger, built with defaults on first use if none was installed.
pub fn logger() -> &'static Arc<Logger> {
    GLOBAL_LOGGER.get_or_init(|| Arc::new(Logger::default()))
}

pub fn info(message: impl Display) {
    logger().info(message);
}

pub fn verbose(message: impl Display) {
    logger().verbose(message);
}

pub fn debug(message: impl Display) {
    logger().debug(message);
}

pub fn warn(message: impl Display) {
    logger().warn(message);
}

pub fn error(message: impl Display) {
    logger().error(message);
}

pub fn critical(message: impl Display) {
    logger().critical(message);
}
