//! Stepwise construction, so callers only name the settings they change.

use super::{Logger, Routing};
use crate::category::CategoryFilter;
use crate::config::expand_tilde;
use crate::fmt::DEFAULT_DATETIME_FORMAT;
use crate::lock::{Lock, NoopLock};
use crate::output::{StderrStream, StdoutStream, Stream};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Defaults: INFO to stdout; ERROR, WARN and CRITICAL to stderr; no log
/// directory; no lock; `%Y-%m-%d %H:%M:%S`; red error lines.
pub struct LoggerBuilder {
    stdout_categories: CategoryFilter,
    stderr_categories: CategoryFilter,
    log_directory: Option<PathBuf>,
    lock: Arc<dyn Lock>,
    datetime_format: String,
    start_time: Option<DateTime<Local>>,
    stdout: Option<Arc<dyn Stream>>,
    stderr: Option<Arc<dyn Stream>>,
    colors: bool,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Captures the process stdout/stderr handles now; later reassignment is not observed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout_categories: CategoryFilter::default_stdout(),
            stderr_categories: CategoryFilter::default_stderr(),
            log_directory: None,
            lock: Arc::new(NoopLock),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            start_time: None,
            stdout: Some(Arc::new(StdoutStream::new())),
            stderr: Some(Arc::new(StderrStream::new())),
            colors: true,
        }
    }

    #[must_use]
    pub fn stdout_categories(mut self, filter: CategoryFilter) -> Self {
        self.stdout_categories = filter;
        self
    }

    #[must_use]
    pub fn stderr_categories(mut self, filter: CategoryFilter) -> Self {
        self.stderr_categories = filter;
        self
    }

    /// Enables the file pipeline. A leading `~` is expanded at build time.
    #[must_use]
    pub fn log_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_directory = Some(dir.into());
        self
    }

    #[must_use]
    pub fn lock(mut self, lock: Arc<dyn Lock>) -> Self {
        self.lock = lock;
        self
    }

    /// chrono strftime syntax.
    #[must_use]
    pub fn datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }

    /// Overrides the run start time that log file names are derived from.
    #[must_use]
    pub const fn start_time(mut self, start_time: DateTime<Local>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    #[must_use]
    pub fn stdout(mut self, stream: impl Stream + 'static) -> Self {
        self.stdout = Some(Arc::new(stream));
        self
    }

    #[must_use]
    pub fn stderr(mut self, stream: impl Stream + 'static) -> Self {
        self.stderr = Some(Arc::new(stream));
        self
    }

    /// Standard-pipeline console output is silently dropped.
    #[must_use]
    pub fn no_stdout(mut self) -> Self {
        self.stdout = None;
        self
    }

    /// Error-pipeline console output is silently dropped.
    #[must_use]
    pub fn no_stderr(mut self) -> Self {
        self.stderr = None;
        self
    }

    /// Piped output and CI logs don't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Announces the log directory through `info` when one is set, subject to
    /// the same routing as any other INFO message.
    #[must_use]
    pub fn build(self) -> Logger {
        let logger = Logger {
            routing: RwLock::new(Routing {
                stdout_categories: self.stdout_categories,
                stderr_categories: self.stderr_categories,
                datetime_format: self.datetime_format,
            }),
            lock: RwLock::new(self.lock),
            log_directory: self.log_directory.map(|dir| expand_tilde(&dir)),
            start_time: self.start_time.unwrap_or_else(Local::now),
            stdout: self.stdout,
            stderr: self.stderr,
            colors: self.colors,
        };

        if let Some(dir) = logger.log_directory() {
            logger.info(format!("logger writing to '{}'", dir.display()));
        }

        logger
    }
}
