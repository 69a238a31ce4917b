// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Duration strings such as `"1y2m"`, `"3 weeks 2d"` or `"90s"`.

use crate::{CalendarDelta, TimeError};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

// Units in strictly descending order; each component is optional.
// `m` is months and `M` is minutes.
#[allow(clippy::expect_used)]
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?P<years>[0-9]+?) ?(?:years|year|Y|y) ?)?",
        r"(?:(?P<months>[0-9]+?) ?(?:months|month|m) ?)?",
        r"(?:(?P<weeks>[0-9]+?) ?(?:weeks|week|W|w) ?)?",
        r"(?:(?P<days>[0-9]+?) ?(?:days|day|D|d) ?)?",
        r"(?:(?P<hours>[0-9]+?) ?(?:hours|hour|H|h) ?)?",
        r"(?:(?P<minutes>[0-9]+?) ?(?:minutes|minute|M) ?)?",
        r"(?:(?P<seconds>[0-9]+?) ?(?:seconds|second|S|s))?$",
    ))
    .expect("constant regex pattern is valid")
});

/// Parse a duration string into a normalized [`CalendarDelta`].
///
/// Recognized unit tokens:
///
/// - years: `Y`, `y`, `year`, `years`
/// - months: `m`, `month`, `months`
/// - weeks: `W`, `w`, `week`, `weeks` (folded into days)
/// - days: `D`, `d`, `day`, `days`
/// - hours: `H`, `h`, `hour`, `hours`
/// - minutes: `M`, `minute`, `minutes`
/// - seconds: `S`, `s`, `second`, `seconds`
///
/// Units must appear in descending order of magnitude. Returns `None` for
/// anything else, including amounts too large for an `i64`. The empty string
/// is the zero duration.
pub fn parse_duration_string(text: &str) -> Option<CalendarDelta> {
    let Some(caps) = DURATION_PATTERN.captures(text) else {
        tracing::debug!(input = text, "duration string does not match the grammar");
        return None;
    };

    let amount = |name: &str| -> Option<i64> {
        caps.name(name).map_or(Some(0), |m| m.as_str().parse().ok())
    };
    let days = amount("weeks")?
        .checked_mul(7)?
        .checked_add(amount("days")?)?;

    Some(CalendarDelta::from_parts(
        amount("years")?,
        amount("months")?,
        days,
        amount("hours")?,
        amount("minutes")?,
        amount("seconds")?,
    ))
}

impl FromStr for CalendarDelta {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration_string(s)
            .ok_or_else(|| TimeError::InvalidArgument(format!("invalid duration: {:?}", s)))
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
