// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display strings for expiring things: `"<t:…:f> (2 days and 3 hours)"`,
//! `"Permanent"`, `"Expired"`.
//!
//! Everything that depends on the current time goes through a [`Clock`], so
//! [`TimeFormatter`] can be driven by a [`crate::FakeClock`] in tests. The
//! free functions use the system clock.

use crate::humanize::{humanize, DEFAULT_PRECISION};
use crate::timestamp::{normalize, render_token, Timestamp, TimestampFormat};
use crate::{compute_delta, CalendarDelta, Clock, SystemClock, TimeError};
use chrono::{DateTime, TimeDelta, Utc};

/// Default unit cap for [`TimeFormatter::with_duration`].
pub const WITH_DURATION_MAX_UNITS: i32 = 2;

pub const PERMANENT: &str = "Permanent";
pub const EXPIRED: &str = "Expired";

/// Formats timestamps relative to the time reported by its clock.
#[derive(Clone, Debug, Default)]
pub struct TimeFormatter<C: Clock = SystemClock> {
    clock: C,
}

impl<C: Clock> TimeFormatter<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// The calendar delta that takes `end` to `start`.
    ///
    /// `end` defaults to now. The delta is positive when `start` is the later
    /// of the two.
    pub fn get_delta(
        &self,
        start: impl Into<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<CalendarDelta, TimeError> {
        let start = normalize(start)?;
        let end = match end {
            Some(end) => normalize(end)?,
            None => self.now(),
        };
        Ok(compute_delta(end, start))
    }

    /// Render `primary` as a token followed by its distance from `reference`,
    /// e.g. `"<t:1576108860:f> (12 hours and 55 seconds)"`.
    ///
    /// `reference` defaults to now. Returns `Ok(None)` when `primary` is
    /// missing or blank; `precision` and `max_units` are not checked then.
    pub fn with_duration(
        &self,
        primary: Option<Timestamp>,
        reference: Option<Timestamp>,
        precision: &str,
        max_units: i32,
    ) -> Result<Option<String>, TimeError> {
        let Some(primary) = primary.filter(|ts| !ts.is_blank()) else {
            return Ok(None);
        };

        let instant = normalize(primary)?;
        let token = render_token(instant, TimestampFormat::DateTime)?;
        let delta = self.get_delta(instant, reference)?.abs();
        let duration = humanize(&delta, precision, max_units)?;

        Ok(Some(format!("{} ({})", token, duration)))
    }

    /// [`with_duration`](Self::with_duration) with second precision and at
    /// most two units.
    pub fn with_duration_default(
        &self,
        primary: Option<Timestamp>,
        reference: Option<Timestamp>,
    ) -> Result<Option<String>, TimeError> {
        self.with_duration(primary, reference, DEFAULT_PRECISION, WITH_DURATION_MAX_UNITS)
    }

    /// Describe how long remains until `expiry`.
    ///
    /// `"Permanent"` when there is no expiry, `"Expired"` once it has passed,
    /// otherwise a relative token the client keeps counting down.
    pub fn until_expiration(&self, expiry: Option<Timestamp>) -> Result<String, TimeError> {
        let Some(expiry) = expiry.filter(|ts| !ts.is_blank()) else {
            return Ok(PERMANENT.to_string());
        };

        let expiry = normalize(expiry)?;
        let now = self.now();
        if expiry < now {
            tracing::debug!(%expiry, %now, "expiry has passed");
            return Ok(EXPIRED.to_string());
        }

        render_token(expiry, TimestampFormat::Relative)
    }

    /// Resolve `delta` to elapsed time, anchored at now.
    ///
    /// Deltas with months or years give different results depending on when
    /// this is called.
    pub fn to_fixed_duration(&self, delta: &CalendarDelta) -> Result<TimeDelta, TimeError> {
        delta.to_fixed_duration_at(self.now())
    }
}

/// [`TimeFormatter::get_delta`] against the system clock.
pub fn get_delta(
    start: impl Into<Timestamp>,
    end: Option<Timestamp>,
) -> Result<CalendarDelta, TimeError> {
    TimeFormatter::new(SystemClock).get_delta(start, end)
}

/// [`TimeFormatter::with_duration`] against the system clock.
pub fn with_duration(
    primary: Option<Timestamp>,
    reference: Option<Timestamp>,
    precision: &str,
    max_units: i32,
) -> Result<Option<String>, TimeError> {
    TimeFormatter::new(SystemClock).with_duration(primary, reference, precision, max_units)
}

/// [`TimeFormatter::with_duration_default`] against the system clock.
pub fn with_duration_default(
    primary: Option<Timestamp>,
    reference: Option<Timestamp>,
) -> Result<Option<String>, TimeError> {
    TimeFormatter::new(SystemClock).with_duration_default(primary, reference)
}

/// [`TimeFormatter::until_expiration`] against the system clock.
pub fn until_expiration(expiry: Option<Timestamp>) -> Result<String, TimeError> {
    TimeFormatter::new(SystemClock).until_expiration(expiry)
}

/// [`TimeFormatter::to_fixed_duration`] against the system clock.
pub fn to_fixed_duration(delta: &CalendarDelta) -> Result<TimeDelta, TimeError> {
    TimeFormatter::new(SystemClock).to_fixed_duration(delta)
}

#[cfg(test)]
#[path = "expiry_tests.rs"]
mod tests;
