//! Line rendering shared by both pipelines: the timestamp bracket, per-line
//! prefixing, and the ANSI handling that keeps color out of log files.

mod color;
mod line;

pub use color::{RED, RESET, red, strip_ansi};
pub use line::{DEFAULT_DATETIME_FORMAT, format_datetime, prefix_lines, timestamp};
