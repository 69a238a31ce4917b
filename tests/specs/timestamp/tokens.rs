//! Token syntax is a compatibility contract with the chat client.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn epoch_integers_render_verbatim() {
    assert_eq!(token(10000), "<t:10000:f>");
    assert_eq!(token(-500), "<t:-500:f>");
}

#[test]
fn fractional_epochs_truncate_toward_zero() {
    assert_eq!(token(1628132028.188289), "<t:1628132028:f>");
    assert_eq!(token(-9823.237182), "<t:-9823:f>");
}

#[test]
fn naive_text_is_utc() {
    assert_eq!(token("2016-12-10T23:55:19"), "<t:1481414119:f>");
    assert_eq!(token(naive(2016, 12, 10, 23, 55, 19)), "<t:1481414119:f>");
}

#[test]
fn offsets_are_converted() {
    assert_eq!(token("1983-08-02 13:14:02-02:30"), "<t:428687042:f>");
    assert_eq!(token(at_offset(-9000, 1983, 8, 2, 13, 14, 2)), "<t:428687042:f>");
}

#[test]
fn dates_are_midnight() {
    assert_eq!(token(date(1942, 4, 3)), "<t:-875664000:f>");
    assert_eq!(token("1942-04-03"), "<t:-875664000:f>");
}

#[yare::parameterized(
    date_time = { "f", "<t:100:f>" },
    day_time = { "F", "<t:100:F>" },
    short_date = { "d", "<t:100:d>" },
    long_date = { "D", "<t:100:D>" },
    time = { "t", "<t:100:t>" },
    time_seconds = { "T", "<t:100:T>" },
    relative = { "relative", "<t:100:R>" },
)]
fn style_selected_by_code_or_name(style: &str, expected: &str) {
    let format: TimestampFormat = style.parse().unwrap();
    self::assert_eq!(stamp_core::render_token(100, format).unwrap(), expected);
}

#[test]
fn unknown_style_is_rejected() {
    let err = "Q".parse::<TimestampFormat>().unwrap_err();
    assert!(matches!(err, TimeError::InvalidArgument(_)));
}

#[test]
fn garbage_text_is_a_parse_error() {
    let err = stamp_core::render_token("yesterday-ish", TimestampFormat::Relative).unwrap_err();
    assert_eq!(err.to_string(), "invalid ISO 8601 timestamp: \"yesterday-ish\"");
}
