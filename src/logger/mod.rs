//! The logger: category routing, the two write pipelines, and the severity
//! methods that feed them.
//!
//! The *standard* pipeline (INFO, VERBOSE, DEBUG) writes to stdout and to the
//! category's log file, each under the attached [`Lock`]. The *error* pipeline
//! (WARN, ERROR, CRITICAL) writes red lines to stderr and to the category's log
//! file without ever touching the lock, so it keeps working while another
//! thread holds the lock or has died holding it.

mod builder;

pub use builder::LoggerBuilder;

use crate::category::{self, CategoryFilter};
use crate::config::Settings;
use crate::fmt;
use crate::lock::{Lock, NoopLock};
use crate::output::{self, Stream};
use chrono::{DateTime, Local};
use std::fmt::{Display, Write as _};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// Which route a message takes to the console and the log directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    /// Stdout, gated by `stdout_categories`; lock-protected.
    Standard,
    /// Stderr in red, gated by `stderr_categories`; never takes the lock.
    Error,
}

/// Settings that `load_settings` may replace at any time.
#[derive(Debug)]
struct Routing {
    stdout_categories: CategoryFilter,
    stderr_categories: CategoryFilter,
    datetime_format: String,
}

/// Shared by reference (or `Arc`) across threads; every method takes `&self`.
pub struct Logger {
    routing: RwLock<Routing>,
    lock: RwLock<Arc<dyn Lock>>,
    log_directory: Option<PathBuf>,
    start_time: DateTime<Local>,
    stdout: Option<Arc<dyn Stream>>,
    stderr: Option<Arc<dyn Stream>>,
    colors: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let routing = self.read_routing();
        f.debug_struct("Logger")
            .field("stdout_categories", &routing.stdout_categories)
            .field("stderr_categories", &routing.stderr_categories)
            .field("datetime_format", &routing.datetime_format)
            .field("log_directory", &self.log_directory)
            .field("start_time", &self.start_time)
            .field("stdout", &self.stdout.is_some())
            .field("stderr", &self.stderr.is_some())
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Console-only logger with the given routing and every other setting at its default.
    #[must_use]
    pub fn new(stdout_categories: CategoryFilter, stderr_categories: CategoryFilter) -> Self {
        Self::builder()
            .stdout_categories(stdout_categories)
            .stderr_categories(stderr_categories)
            .build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replaces the lock used by the standard pipeline. `None` keeps the current one.
    ///
    /// A writer that already acquired the previous lock finishes under it; call this
    /// before threads start logging concurrently.
    pub fn attach(&self, lock: Option<Arc<dyn Lock>>) {
        if let Some(lock) = lock {
            *self.lock.write().unwrap_or_else(PoisonError::into_inner) = lock;
        }
    }

    /// Merges whichever of the three settings are present; the rest stay as they are.
    pub fn load_settings(&self, settings: &Settings) {
        let mut routing = self.routing.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(filter) = &settings.stdout_categories {
            routing.stdout_categories = filter.clone();
        }
        if let Some(filter) = &settings.stderr_categories {
            routing.stderr_categories = filter.clone();
        }
        if let Some(format) = &settings.datetime_format {
            routing.datetime_format.clone_from(format);
        }
    }

    /// Loads a `.toml`/`.json` settings file and merges it.
    ///
    /// # Errors
    /// Read or parse failures; the logger is left unchanged.
    pub fn load_settings_file(&self, path: &Path) -> Result<(), crate::Error> {
        let settings = Settings::load_from(path)?;
        self.load_settings(&settings);
        Ok(())
    }

    /// The log file for `category` in this run, or `None` without a log directory.
    ///
    /// Derived from the start time, not the current time, so it never changes
    /// during the logger's lifetime.
    #[must_use]
    pub fn filename(&self, category: &str) -> Option<PathBuf> {
        self.log_directory
            .as_deref()
            .map(|dir| output::log_file_path(dir, &self.start_time, category))
    }

    #[must_use]
    pub fn stdout_categories(&self) -> CategoryFilter {
        self.read_routing().stdout_categories.clone()
    }

    #[must_use]
    pub fn stderr_categories(&self) -> CategoryFilter {
        self.read_routing().stderr_categories.clone()
    }

    #[must_use]
    pub fn datetime_format(&self) -> String {
        self.read_routing().datetime_format.clone()
    }

    #[must_use]
    pub fn log_directory(&self) -> Option<&Path> {
        self.log_directory.as_deref()
    }

    #[must_use]
    pub const fn start_time(&self) -> DateTime<Local> {
        self.start_time
    }

    pub fn info(&self, message: impl Display) {
        self.log(Pipeline::Standard, category::INFO, message);
    }

    pub fn verbose(&self, message: impl Display) {
        self.log(Pipeline::Standard, category::VERBOSE, message);
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Pipeline::Standard, category::DEBUG, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Pipeline::Error, category::WARN, message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Pipeline::Error, category::ERROR, message);
    }

    /// Logs `cause` (with its `source()` chain) followed by `message`.
    pub fn error_with(&self, cause: &dyn std::error::Error, message: impl Display) {
        let message = format!("{}\n{message}", error_report(cause));
        self.log(Pipeline::Error, category::ERROR, message);
    }

    /// Logs `cause` and its `source()` chain on their own.
    pub fn error_cause(&self, cause: &dyn std::error::Error) {
        self.log(Pipeline::Error, category::ERROR, error_report(cause));
    }

    /// Drops the attached lock for good, then logs.
    ///
    /// Meant for crash and shutdown paths where the lock may be held forever. A
    /// thread racing with this call may still write under the old lock.
    pub fn critical(&self, message: impl Display) {
        *self.lock.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(NoopLock);
        self.log(Pipeline::Error, category::CRITICAL, message);
    }

    /// Sends `message` down `pipeline` under an arbitrary category label.
    pub fn log(&self, pipeline: Pipeline, category: &str, message: impl Display) {
        let message = message.to_string();
        match pipeline {
            Pipeline::Standard => {
                self.print(category, &message);
                self.write(category, &message);
            }
            Pipeline::Error => {
                self.print_error(category, &message);
                self.write_error(category, &message);
            }
        }
    }

    /// Whether `category` would produce any output at all on `pipeline`.
    #[must_use]
    pub fn is_enabled(&self, pipeline: Pipeline, category: &str) -> bool {
        if self.log_directory.is_some() {
            return true;
        }
        let routing = self.read_routing();
        match pipeline {
            Pipeline::Standard => {
                self.stdout.is_some() && routing.stdout_categories.allows(category)
            }
            Pipeline::Error => self.stderr.is_some() && routing.stderr_categories.allows(category),
        }
    }

    fn read_routing(&self) -> RwLockReadGuard<'_, Routing> {
        self.routing.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_lock(&self) -> Arc<dyn Lock> {
        Arc::clone(&self.lock.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// The datetime format if `category` passes the selected filter.
    ///
    /// The read guard is released before returning so no settings lock is held
    /// while writing.
    fn gate(&self, pipeline: Pipeline, category: &str) -> Option<String> {
        let routing = self.read_routing();
        let filter = match pipeline {
            Pipeline::Standard => &routing.stdout_categories,
            Pipeline::Error => &routing.stderr_categories,
        };
        filter
            .allows(category)
            .then(|| routing.datetime_format.clone())
    }

    fn print(&self, category: &str, message: &str) {
        let Some(stdout) = &self.stdout else {
            return;
        };
        let Some(format) = self.gate(Pipeline::Standard, category) else {
            return;
        };

        let lock = self.current_lock();
        let _release = lock.acquire();

        let _ = stdout.flush();
        if let Some(stderr) = &self.stderr {
            let _ = stderr.flush();
        }

        let prefix = fmt::timestamp(&Local::now(), &format, category);
        let _ = stdout.write_str(&fmt::prefix_lines(&prefix, message));
        let _ = stdout.flush();
    }

    fn print_error(&self, category: &str, message: &str) {
        let Some(stderr) = &self.stderr else {
            return;
        };
        let Some(format) = self.gate(Pipeline::Error, category) else {
            return;
        };

        let _ = stderr.flush();

        let prefix = fmt::timestamp(&Local::now(), &format, category);
        let mut lines = String::with_capacity(message.len() + prefix.len() + 16);
        for line in message.split('\n') {
            let line = format!("{prefix} {}", fmt::strip_ansi(line));
            if self.colors {
                lines.push_str(&fmt::red(&line));
            } else {
                lines.push_str(&line);
            }
            lines.push('\n');
        }

        let _ = stderr.write_str(&lines);
        let _ = stderr.flush();
    }

    fn write(&self, category: &str, message: &str) {
        let Some(dir) = &self.log_directory else {
            return;
        };
        let format = self.datetime_format();

        let lock = self.current_lock();
        let _release = lock.acquire();

        if !self.prepare_directory(dir) {
            return;
        }
        self.append(dir, category, &format, message);
    }

    fn write_error(&self, category: &str, message: &str) {
        let Some(dir) = &self.log_directory else {
            return;
        };
        let format = self.datetime_format();

        if !self.prepare_directory(dir) {
            return;
        }
        self.append(dir, category, &format, message);
    }

    /// A directory that can't be created costs the file write, never the caller.
    ///
    /// The warning goes to the console only: its own file write would fail the
    /// same way.
    fn prepare_directory(&self, dir: &Path) -> bool {
        match output::ensure_directory(dir) {
            Ok(()) => true,
            Err(e) => {
                self.print_error(
                    category::WARN,
                    &format!("failed to create log directory '{}': {e}", dir.display()),
                );
                false
            }
        }
    }

    fn append(&self, dir: &Path, category: &str, format: &str, message: &str) {
        let path = output::log_file_path(dir, &self.start_time, category);
        let prefix = fmt::timestamp(&Local::now(), format, category);
        let _ = output::append_lines(&path, &fmt::prefix_lines(&prefix, &fmt::strip_ansi(message)));
    }
}

/// `cause`, then each `source()` on its own indented line.
fn error_report(cause: &dyn std::error::Error) -> String {
    let mut report = cause.to_string();
    let mut source = cause.source();
    if source.is_some() {
        report.push_str("\nCaused by:");
    }
    while let Some(inner) = source {
        let _ = write!(report, "\n    {inner}");
        source = inner.source();
    }
    report
}
