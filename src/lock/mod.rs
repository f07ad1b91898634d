//! The mutual-exclusion capability the standard pipeline writes under.
//!
//! The logger never creates threads; it only serialises writes through whatever
//! [`Lock`] the embedding application hands it. Without one it falls back to
//! [`NoopLock`], which makes every write unsynchronised but always safe to run.

use std::sync::{Mutex, PoisonError};

/// Held for the duration of a scoped acquisition; dropping it releases the lock.
///
/// Release happens on every exit path, including unwinding out of a write.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct ScopedRelease<'a> {
    held: Option<Box<dyn Held + 'a>>,
}

/// Erases the concrete guard type so any primitive's guard fits in `ScopedRelease`.
trait Held {}

impl<T> Held for T {}

impl<'a> ScopedRelease<'a> {
    /// Wraps a primitive's guard; the guard's `Drop` performs the release.
    pub fn holding<G: 'a>(guard: G) -> Self {
        Self {
            held: Some(Box::new(guard)),
        }
    }

    /// A release that does nothing, for locks with nothing to hold.
    pub const fn noop() -> Self {
        Self { held: None }
    }

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.held.is_none()
    }
}

impl std::fmt::Debug for ScopedRelease<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedRelease")
            .field("held", &self.held.is_some())
            .finish()
    }
}

/// `Send + Sync` so one lock can be shared by every thread holding the logger.
pub trait Lock: Send + Sync {
    /// Blocks until the lock is held.
    fn acquire(&self) -> ScopedRelease<'_>;
}

/// Stand-in used when no real lock is attached, and by critical logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLock;

impl Lock for NoopLock {
    fn acquire(&self) -> ScopedRelease<'_> {
        ScopedRelease::noop()
    }
}

/// A poisoned mutex still guards nothing but `()`, so the poison is ignored.
impl Lock for Mutex<()> {
    fn acquire(&self) -> ScopedRelease<'_> {
        ScopedRelease::holding(self.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
