//! Every output line is `[<datetime> <CATEGORY>] <text>`; multi-line messages
//! are split so each line carries its own prefix.

use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders `time` with a strftime `format`.
///
/// chrono reports a malformed format as a `fmt::Error` at render time, which
/// `to_string()` would turn into a panic. A bad format from a settings file
/// falls back to [`DEFAULT_DATETIME_FORMAT`] instead.
#[must_use]
pub fn format_datetime<Tz>(time: &DateTime<Tz>, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    if write!(out, "{}", time.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", time.format(DEFAULT_DATETIME_FORMAT));
    }
    out
}

/// `[<datetime> <category>]`
#[must_use]
pub fn timestamp<Tz>(time: &DateTime<Tz>, format: &str, category: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("[{} {category}]", format_datetime(time, format))
}

/// Prefixes each `\n`-separated line and terminates it with a newline.
///
/// A trailing newline in `message` yields a trailing prefixed empty line, so
/// `n` separators always produce `n + 1` output lines.
#[must_use]
pub fn prefix_lines(prefix: &str, message: &str) -> String {
    let mut out = String::with_capacity(message.len() + prefix.len() + 2);
    for line in message.split('\n') {
        out.push_str(prefix);
        out.push(' ');
        out.push_str(line);
        out.push('\n');
    }
    out
}
