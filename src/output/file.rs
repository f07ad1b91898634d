//! Per-run, per-category log files.

use chrono::{DateTime, Datelike, Local, Timelike};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// `<dir>/<YYYY>.<MM>.<DD>.<HH>.<mm>.<category>.txt`, derived from the run's
/// start time so every write of one category in one run lands in one file.
#[must_use]
pub fn log_file_path(dir: &Path, start_time: &DateTime<Local>, category: &str) -> PathBuf {
    dir.join(format!(
        "{:04}.{:02}.{:02}.{:02}.{:02}.{category}.txt",
        start_time.year(),
        start_time.month(),
        start_time.day(),
        start_time.hour(),
        start_time.minute(),
    ))
}

/// Creates `dir` (and parents) unless it already exists.
///
/// # Errors
/// The `create_dir_all` failure, e.g. a parent that is a regular file.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
}

/// Appends an already formatted batch of lines in a single write.
///
/// # Errors
/// Open or write failures on `path`.
pub fn append_lines(path: &Path, lines: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(lines.as_bytes())
}
