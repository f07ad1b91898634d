//! The global logger is installed once per process, so this file holds a single test.

use timberline::{BufferStream, CategoryFilter, Logger, global};

#[test]
fn global_logger_is_installed_once() {
    let stdout = BufferStream::new();
    let logger = Logger::builder()
        .stdout_categories(CategoryFilter::Unrestricted)
        .datetime_format("T")
        .stdout(stdout.clone())
        .no_stderr()
        .build();

    assert!(global::init(logger));
    assert!(!global::init(Logger::builder().no_stdout().build()));

    global::info("one");
    global::verbose("two");
    global::debug("three");
    global::warn("not on stdout");

    assert_eq!(
        stdout.lines(),
        vec!["[T INFO] one", "[T VERBOSE] two", "[T DEBUG] three"]
    );
    assert_eq!(global::logger().datetime_format(), "T");
}
