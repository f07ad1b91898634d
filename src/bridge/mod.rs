//! Hooks that route messages from outside the crate into a [`Logger`]: the
//! `log` facade and the panic hook.

use crate::category;
use crate::logger::{Logger, Pipeline};
use log::{Log, Metadata, Record};
use std::panic::PanicHookInfo;
use std::sync::Arc;

/// Adapts a shared [`Logger`] to the `log` crate's `Log` trait.
#[derive(Debug, Clone)]
pub struct LogBridge {
    logger: Arc<Logger>,
}

impl LogBridge {
    #[must_use]
    pub const fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

/// Maps a facade level onto the pipeline and category the severity methods use.
///
/// `log` has no VERBOSE; its `Trace` level is the closest match.
#[must_use]
pub const fn route(level: log::Level) -> (Pipeline, &'static str) {
    match level {
        log::Level::Error => (Pipeline::Error, category::ERROR),
        log::Level::Warn => (Pipeline::Error, category::WARN),
        log::Level::Info => (Pipeline::Standard, category::INFO),
        log::Level::Debug => (Pipeline::Standard, category::DEBUG),
        log::Level::Trace => (Pipeline::Standard, category::VERBOSE),
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        let (pipeline, category) = route(metadata.level());
        self.logger.is_enabled(pipeline, category)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let (pipeline, category) = route(record.level());
        self.logger.log(pipeline, category, record.args());
    }

    /// Every write is flushed as it happens.
    fn flush(&self) {}
}

/// Installs `logger` behind the `log` macros, with every level enabled.
///
/// # Errors
/// Fails if another `log` backend is already installed.
pub fn init_log_bridge(logger: Arc<Logger>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge::new(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Logs every panic through [`Logger::critical`], then runs the previous hook.
///
/// `critical` drops the logger's lock first, so a panic inside a locked write
/// can still be reported.
pub fn install_panic_hook(logger: Arc<Logger>) {
    let previous = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        logger.critical(panic_report(info));
        previous(info);
    }));
}

fn panic_report(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Box<dyn Any>".to_string());

    match info.location() {
        Some(location) => format!(
            "panicked at {}:{}:{}:\n{message}",
            location.file(),
            location.line(),
            location.column()
        ),
        None => format!("panicked:\n{message}"),
    }
}
