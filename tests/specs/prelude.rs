//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL around a formatter frozen at a known instant.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use stamp_core::test_support::{at_offset, date, naive, utc};
pub use stamp_core::{CalendarDelta, FakeClock, TimeError, TimeFormatter, Timestamp, TimestampFormat};

/// Instant every spec formatter starts at: 2021-06-15T12:00:00Z.
pub const SPEC_NOW_EPOCH: i64 = 1_623_758_400;

/// A formatter whose clock is frozen at [`SPEC_NOW_EPOCH`].
pub fn formatter() -> TimeFormatter<FakeClock> {
    TimeFormatter::new(stamp_core::test_support::frozen_clock())
}

/// Shorthand for an optional timestamp argument.
pub fn ts(value: impl Into<Timestamp>) -> Option<Timestamp> {
    Some(value.into())
}

/// Render with the default full date/time style.
pub fn token(value: impl Into<Timestamp>) -> String {
    stamp_core::render_token(value, TimestampFormat::default()).unwrap()
}

/// Humanize a delta with the library defaults.
pub fn human(delta: CalendarDelta) -> String {
    stamp_core::humanize(&delta, stamp_core::DEFAULT_PRECISION, stamp_core::DEFAULT_MAX_UNITS)
        .unwrap()
}
