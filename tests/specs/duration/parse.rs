//! Duration arguments typed by users, e.g. `!mute @user 1d12h`.

use crate::prelude::*;
use similar_asserts::assert_eq;
use stamp_core::parse_duration_string;

#[test]
fn parsed_duration_humanizes() {
    let delta = parse_duration_string("1y2m3w4d5h6M7s").unwrap();
    assert_eq!(
        human(delta),
        "1 year, 2 months, 25 days, 5 hours, 6 minutes and 7 seconds"
    );
}

#[test]
fn out_of_order_units_do_not_match() {
    assert_eq!(parse_duration_string("1h1d"), None);
    assert_eq!(parse_duration_string("tomorrow"), None);
}

#[test]
fn parsed_duration_applies_to_an_instant() {
    let delta = parse_duration_string("1m").unwrap();
    assert_eq!(delta.checked_add_to(utc(2021, 1, 31, 0, 0, 0)), Some(utc(2021, 2, 28, 0, 0, 0)));
}
