//! Human-readable durations shown next to timestamps.

use crate::prelude::*;
use similar_asserts::assert_eq;
use stamp_core::{compute_delta, humanize, HumanizeConfig};

#[test]
fn zero_delta() {
    assert_eq!(human(CalendarDelta::ZERO), "0 seconds");
    assert_eq!(humanize(&CalendarDelta::ZERO, "minutes", 6).unwrap(), "less than a minute");
}

#[test]
fn every_unit_with_defaults() {
    let delta = CalendarDelta::from_parts(2, 11, 1, 1, 5, 1);
    assert_eq!(
        human(delta),
        "2 years, 11 months, 1 day, 1 hour, 5 minutes and 1 second"
    );
}

#[test]
fn calendar_delta_between_instants() {
    let delta = compute_delta(utc(2017, 1, 31, 0, 0, 0), utc(2019, 12, 31, 0, 0, 0));
    assert_eq!(human(delta), "2 years and 11 months");
}

#[test]
fn max_units_truncates() {
    let delta = CalendarDelta::ZERO.with_days(2).with_hours(2);
    assert_eq!(humanize(&delta, "seconds", 1).unwrap(), "2 days");
}

#[test]
fn non_positive_max_units_rejected() {
    let delta = CalendarDelta::ZERO.with_days(2).with_hours(2);
    for max_units in [0, -1] {
        let err = humanize(&delta, "hours", max_units).unwrap_err();
        assert_eq!(err, TimeError::InvalidArgument("max_units must be positive".to_string()));
    }
}

#[test]
fn config_loaded_from_toml() {
    let config = HumanizeConfig::from_toml("precision = \"minutes\"\nmax_units = 3\n").unwrap();
    let delta = CalendarDelta::from_parts(0, 1, 2, 3, 4, 5);
    assert_eq!(config.humanize(&delta).unwrap(), "1 month, 2 days and 3 hours");
}
