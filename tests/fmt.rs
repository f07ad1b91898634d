//! Tests for line formatting and ANSI handling.

use chrono::{Local, TimeZone};
use timberline::fmt::{
    DEFAULT_DATETIME_FORMAT, RED, RESET, format_datetime, prefix_lines, red, strip_ansi, timestamp,
};

#[test]
fn strip_removes_color_codes() {
    assert_eq!(strip_ansi("\x1b[31mred\x1b[0m plain"), "red plain");
    assert_eq!(strip_ansi("\x1b[38;2;255;85;85mtrue color\x1b[0m"), "true color");
}

#[test]
fn strip_leaves_plain_text_alone() {
    assert_eq!(strip_ansi("no escapes [here]"), "no escapes [here]");
}

#[test]
fn red_wraps_with_reset() {
    assert_eq!(red("boom"), format!("{RED}boom{RESET}"));
    assert_eq!(strip_ansi(&red("boom")), "boom");
}

#[test]
fn timestamp_brackets_datetime_and_category() {
    let time = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    assert_eq!(
        timestamp(&time, DEFAULT_DATETIME_FORMAT, "INFO"),
        "[2024-03-09 07:05:01 INFO]"
    );
}

#[test]
fn invalid_format_falls_back_to_default() {
    let time = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    assert_eq!(format_datetime(&time, "%Q"), "2024-03-09 07:05:01");
}

#[test]
fn each_line_gets_its_own_prefix() {
    assert_eq!(
        prefix_lines("[T INFO]", "one\ntwo\nthree"),
        "[T INFO] one\n[T INFO] two\n[T INFO] three\n"
    );
}

#[test]
fn trailing_newline_yields_empty_prefixed_line() {
    assert_eq!(prefix_lines("[T INFO]", "one\n"), "[T INFO] one\n[T INFO] \n");
}
