//! Expiry strings shown on infractions and reminders.

use crate::prelude::*;
use similar_asserts::assert_eq;
use stamp_core::{EXPIRED, PERMANENT};

#[test]
fn token_with_duration() {
    let formatted = formatter()
        .with_duration_default(ts("2019-12-12T00:01:00Z"), ts(naive(2019, 12, 11, 12, 0, 5)))
        .unwrap();
    assert_eq!(formatted.as_deref(), Some("<t:1576108860:f> (12 hours and 55 seconds)"));
}

#[test]
fn duration_is_absolute() {
    let earlier = formatter()
        .with_duration_default(ts("2019-11-23T20:53:00Z"), ts("2019-11-23T20:58:00Z"))
        .unwrap();
    assert_eq!(earlier.as_deref(), Some("<t:1574542380:f> (5 minutes)"));
}

#[test]
fn missing_timestamp_formats_to_nothing() {
    assert_eq!(formatter().with_duration_default(None, None).unwrap(), None);
}

#[test]
fn expiry_states() {
    let f = formatter();
    assert_eq!(f.until_expiration(None).unwrap(), PERMANENT);
    assert_eq!(f.until_expiration(ts("1000-12-12T00:01:00Z")).unwrap(), EXPIRED);
    assert_eq!(
        f.until_expiration(ts(SPEC_NOW_EPOCH + 60)).unwrap(),
        format!("<t:{}:R>", SPEC_NOW_EPOCH + 60)
    );
}

#[test]
fn expiry_passes_as_the_clock_moves() {
    let f = formatter();
    let expiry = ts(SPEC_NOW_EPOCH + 3600);
    assert_eq!(f.until_expiration(expiry.clone()).unwrap(), "<t:1623762000:R>");

    f.clock().advance(chrono::TimeDelta::minutes(61));
    assert_eq!(f.until_expiration(expiry).unwrap(), EXPIRED);
}
