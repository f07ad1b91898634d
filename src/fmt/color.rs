//! Console error output is red; log files must never carry the escape codes.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// SGR foreground red.
pub const RED: &str = "\x1b[31m";

/// Terminates any active SGR styling so subsequent text returns to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// ESC, then anything up to and including the first `m`.
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b[^m]*m").expect("Invalid ANSI escape regex"));

/// Borrows the input untouched when there is nothing to strip.
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

#[must_use]
pub fn red(text: &str) -> String {
    format!("{RED}{text}{RESET}")
}
