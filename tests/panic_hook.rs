//! The panic hook is process-global, so this file holds a single test.

use std::panic;
use std::sync::Arc;
use timberline::{BufferStream, Logger, install_panic_hook};

#[test]
fn panics_are_logged_as_critical() {
    let stderr = BufferStream::new();
    let logger = Logger::builder()
        .datetime_format("T")
        .no_stdout()
        .stderr(stderr.clone())
        .colors(false)
        .build();

    install_panic_hook(Arc::new(logger));

    let result = panic::catch_unwind(|| panic!("kaboom"));
    assert!(result.is_err());

    let lines = stderr.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("[T CRITICAL] panicked at "));
    assert!(lines[0].contains("panic_hook.rs"));
    assert_eq!(lines[1], "[T CRITICAL] kaboom");
}
