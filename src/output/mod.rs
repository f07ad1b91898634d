//! Where formatted lines end up: console streams and per-category log files.
//!
//! Console handles are injected at construction through the [`Stream`] trait,
//! so swapping the process's global stdout later is never observed by an
//! existing logger, and tests can capture output in memory.

mod console;
mod file;

pub use console::{BufferStream, StderrStream, StdoutStream};
pub use file::{append_lines, ensure_directory, log_file_path};

use std::io;

/// `Send + Sync` bounds let a single stream be shared by every logging thread.
pub trait Stream: Send + Sync {
    /// Writes an already formatted batch of lines in one call.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write_str(&self, text: &str) -> io::Result<()>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> io::Result<()>;
}
