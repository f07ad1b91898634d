//! Tests for routing `log` facade records into a logger.

use std::sync::Arc;
use timberline::{BufferStream, CategoryFilter, Logger, Pipeline, bridge, init_log_bridge};

#[test]
fn route_maps_levels_to_categories() {
    assert_eq!(bridge::route(log::Level::Error), (Pipeline::Error, "ERROR"));
    assert_eq!(bridge::route(log::Level::Warn), (Pipeline::Error, "WARN"));
    assert_eq!(bridge::route(log::Level::Info), (Pipeline::Standard, "INFO"));
    assert_eq!(bridge::route(log::Level::Debug), (Pipeline::Standard, "DEBUG"));
    assert_eq!(bridge::route(log::Level::Trace), (Pipeline::Standard, "VERBOSE"));
}

#[test]
fn facade_records_reach_the_logger() {
    let stdout = BufferStream::new();
    let stderr = BufferStream::new();
    let logger = Logger::builder()
        .stdout_categories(CategoryFilter::only(["INFO", "VERBOSE"]))
        .stderr_categories(CategoryFilter::Unrestricted)
        .datetime_format("T")
        .stdout(stdout.clone())
        .stderr(stderr.clone())
        .colors(false)
        .build();

    init_log_bridge(Arc::new(logger)).unwrap();
    assert!(log::log_enabled!(log::Level::Info));
    assert!(!log::log_enabled!(log::Level::Debug));

    log::info!("listening on port {}", 8080);
    log::trace!("fine detail");
    log::debug!("filtered");
    log::warn!("slow response");

    assert_eq!(
        stdout.lines(),
        vec!["[T INFO] listening on port 8080", "[T VERBOSE] fine detail"]
    );
    assert_eq!(stderr.lines(), vec!["[T WARN] slow response"]);
}
