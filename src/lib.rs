#![forbid(unsafe_code)]

//! `timberline` - a minimal thread-safe logger.
//!
//! Messages are prefixed with a timestamp and a category label, then routed:
//! - INFO, VERBOSE and DEBUG go to stdout under the attached lock
//! - WARN, ERROR and CRITICAL go to stderr in red, without taking the lock
//! - with a log directory set, every category is also appended to a per-run,
//!   per-category file, with color codes stripped
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use timberline::{CategoryFilter, Logger};
//!
//! let logger = Logger::builder()
//!     .stdout_categories(CategoryFilter::only(["INFO", "DEBUG"]))
//!     .stderr_categories(CategoryFilter::Unrestricted)
//!     .lock(Arc::new(Mutex::new(())))
//!     .build();
//!
//! logger.info("Application started");
//! logger.debug("Connecting to server...");
//! logger.warn("Connection timeout");
//! logger.error("Connection failed");
//! ```

pub mod bridge;
pub mod category;
pub mod config;
pub mod fmt;
pub mod global;
pub mod lock;
pub mod logger;
pub mod output;

mod error;

pub use bridge::{LogBridge, init_log_bridge, install_panic_hook};
pub use category::{CategoryFilter, ParseFilterError};
pub use config::Settings;
pub use error::Error;
pub use lock::{Lock, NoopLock, ScopedRelease};
pub use logger::{Logger, LoggerBuilder, Pipeline};
pub use output::{BufferStream, StderrStream, StdoutStream, Stream};
