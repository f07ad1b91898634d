//! Console streams. The process handles are captured once, when the stream is
//! created, rather than looked up on every write.

use super::Stream;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Standard output, captured at construction.
#[derive(Debug)]
pub struct StdoutStream(io::Stdout);

impl StdoutStream {
    #[must_use]
    pub fn new() -> Self {
        Self(io::stdout())
    }
}

impl Default for StdoutStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream for StdoutStream {
    fn write_str(&self, text: &str) -> io::Result<()> {
        self.0.lock().write_all(text.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        self.0.lock().flush()
    }
}

/// Standard error, captured at construction.
#[derive(Debug)]
pub struct StderrStream(io::Stderr);

impl StderrStream {
    #[must_use]
    pub fn new() -> Self {
        Self(io::stderr())
    }
}

impl Default for StderrStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Stream for StderrStream {
    fn write_str(&self, text: &str) -> io::Result<()> {
        self.0.lock().write_all(text.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        self.0.lock().flush()
    }
}

/// In-memory stream. Clones share the same buffer, so one clone can be handed
/// to the logger while another reads back what was written.
#[derive(Debug, Clone, Default)]
pub struct BufferStream {
    buffer: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<Mutex<usize>>,
}

impl BufferStream {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Convenience for assertions that care about lines, not bytes.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }

    /// How many times `flush` has been called.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        *self.flushes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drops everything written so far.
    pub fn clear(&self) {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Stream for BufferStream {
    fn write_str(&self, text: &str) -> io::Result<()> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(text.as_bytes());
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        *self.flushes.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Ok(())
    }
}
