// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar-aware differences between instants.
//!
//! A [`CalendarDelta`] is expressed in human calendar units. Unlike a
//! [`TimeDelta`], its month and year components have no fixed length: one
//! month after January 31 is the last day of February, one month after
//! March 15 is April 15.

use crate::TimeError;
use chrono::{DateTime, Datelike, Months, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Neg;

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// A signed calendar difference, decomposed into calendar units.
///
/// Components are always normalized: seconds and minutes stay within
/// `-59..=59`, hours within `-23..=23`, months within `-11..=11`. Days are
/// never carried into months because month length depends on the anchor.
/// The sub-second remainder is kept so that applying a computed delta lands
/// exactly on its target, but it is never rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawDelta")]
pub struct CalendarDelta {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    nanoseconds: i64,
}

/// Unnormalized wire form; every field optional.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawDelta {
    years: i64,
    months: i64,
    days: i64,
    hours: i64,
    minutes: i64,
    seconds: i64,
    nanoseconds: i64,
}

impl From<RawDelta> for CalendarDelta {
    fn from(raw: RawDelta) -> Self {
        CalendarDelta {
            years: raw.years,
            months: raw.months,
            days: raw.days,
            hours: raw.hours,
            minutes: raw.minutes,
            seconds: raw.seconds,
            nanoseconds: raw.nanoseconds,
        }
        .normalized()
    }
}

impl CalendarDelta {
    /// The empty delta.
    pub const ZERO: CalendarDelta = CalendarDelta {
        years: 0,
        months: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        nanoseconds: 0,
    };

    /// Build a delta from whole components, carrying overflow upward.
    ///
    /// `from_parts(0, 13, 0, 0, 0, 90)` is 1 year, 1 month, 1 minute and
    /// 30 seconds.
    pub fn from_parts(
        years: i64,
        months: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Self {
        CalendarDelta {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
            nanoseconds: 0,
        }
        .normalized()
    }

    pub fn with_years(self, years: i64) -> Self {
        CalendarDelta { years, ..self }.normalized()
    }

    pub fn with_months(self, months: i64) -> Self {
        CalendarDelta { months, ..self }.normalized()
    }

    pub fn with_weeks(self, weeks: i64) -> Self {
        self.with_days(weeks.saturating_mul(7))
    }

    pub fn with_days(self, days: i64) -> Self {
        CalendarDelta { days, ..self }.normalized()
    }

    pub fn with_hours(self, hours: i64) -> Self {
        CalendarDelta { hours, ..self }.normalized()
    }

    pub fn with_minutes(self, minutes: i64) -> Self {
        CalendarDelta { minutes, ..self }.normalized()
    }

    pub fn with_seconds(self, seconds: i64) -> Self {
        CalendarDelta { seconds, ..self }.normalized()
    }

    pub fn with_nanoseconds(self, nanoseconds: i64) -> Self {
        CalendarDelta {
            nanoseconds,
            ..self
        }
        .normalized()
    }

    pub fn years(&self) -> i64 {
        self.years
    }

    pub fn months(&self) -> i64 {
        self.months
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Component-wise absolute value.
    pub fn abs(self) -> Self {
        CalendarDelta {
            years: self.years.saturating_abs(),
            months: self.months.saturating_abs(),
            days: self.days.saturating_abs(),
            hours: self.hours.saturating_abs(),
            minutes: self.minutes.saturating_abs(),
            seconds: self.seconds.saturating_abs(),
            nanoseconds: self.nanoseconds.saturating_abs(),
        }
    }

    /// Apply this delta to `anchor`.
    ///
    /// Years and months are applied first, clamping the day to the last
    /// valid day of the resulting month; the fixed-length remainder is added
    /// afterwards. Returns `None` if the result is not representable.
    pub fn checked_add_to(&self, anchor: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let total_months = self.years.checked_mul(12)?.checked_add(self.months)?;
        shift_months(anchor, total_months)?.checked_add_signed(self.fixed_part()?)
    }

    /// Resolve this delta to elapsed time by anchoring it at `anchor`.
    ///
    /// The result depends on the anchor whenever months or years are
    /// involved.
    pub fn to_fixed_duration_at(&self, anchor: DateTime<Utc>) -> Result<TimeDelta, TimeError> {
        let target = self.checked_add_to(anchor).ok_or_else(|| {
            TimeError::OutOfRange(format!("{:?} applied to {}", self, anchor))
        })?;
        Ok(target.signed_duration_since(anchor))
    }

    fn fixed_part(&self) -> Option<TimeDelta> {
        TimeDelta::try_days(self.days)?
            .checked_add(&TimeDelta::try_hours(self.hours)?)?
            .checked_add(&TimeDelta::try_minutes(self.minutes)?)?
            .checked_add(&TimeDelta::try_seconds(self.seconds)?)?
            .checked_add(&TimeDelta::nanoseconds(self.nanoseconds))
    }

    fn normalized(mut self) -> Self {
        // Truncating division keeps the carry and the remainder on the
        // sign of the original component.
        let (carry, rest) = split_carry(self.nanoseconds, NANOS_PER_SECOND);
        self.nanoseconds = rest;
        self.seconds = self.seconds.saturating_add(carry);

        let (carry, rest) = split_carry(self.seconds, 60);
        self.seconds = rest;
        self.minutes = self.minutes.saturating_add(carry);

        let (carry, rest) = split_carry(self.minutes, 60);
        self.minutes = rest;
        self.hours = self.hours.saturating_add(carry);

        let (carry, rest) = split_carry(self.hours, 24);
        self.hours = rest;
        self.days = self.days.saturating_add(carry);

        let (carry, rest) = split_carry(self.months, 12);
        self.months = rest;
        self.years = self.years.saturating_add(carry);

        self
    }
}

fn split_carry(value: i64, base: i64) -> (i64, i64) {
    (value / base, value % base)
}

impl Neg for CalendarDelta {
    type Output = CalendarDelta;

    fn neg(self) -> CalendarDelta {
        CalendarDelta {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            days: self.days.saturating_neg(),
            hours: self.hours.saturating_neg(),
            minutes: self.minutes.saturating_neg(),
            seconds: self.seconds.saturating_neg(),
            nanoseconds: self.nanoseconds.saturating_neg(),
        }
    }
}

/// Calendar-aware `end - start`.
///
/// The result satisfies `compute_delta(a, b).checked_add_to(a) == Some(b)`
/// for every pair of instants. When `end` is after `start` every component is
/// non-negative; when it is before, every component is non-positive.
pub fn compute_delta(start: DateTime<Utc>, end: DateTime<Utc>) -> CalendarDelta {
    let mut months = i64::from(end.year() - start.year()) * 12 + i64::from(end.month())
        - i64::from(start.month());

    // Step one month back toward `start` while the shift passes `end`.
    let step = if end < start { 1 } else { -1 };
    let (months, anchor) = loop {
        match shift_months(start, months) {
            Some(candidate) if overshoots(candidate, end, step) => months += step,
            Some(candidate) => break (months, candidate),
            None => break (0, start),
        }
    };

    let rest = end.signed_duration_since(anchor);
    CalendarDelta {
        months,
        seconds: rest.num_seconds(),
        nanoseconds: i64::from(rest.subsec_nanos()),
        ..CalendarDelta::ZERO
    }
    .normalized()
}

fn overshoots(candidate: DateTime<Utc>, end: DateTime<Utc>, step: i64) -> bool {
    if step < 0 {
        candidate > end
    } else {
        candidate < end
    }
}

/// Shift by whole months, clamping the day to the end of the target month.
fn shift_months(instant: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        instant.checked_add_months(magnitude)
    } else {
        instant.checked_sub_months(magnitude)
    }
}

#[cfg(test)]
#[path = "delta_tests.rs"]
mod tests;
