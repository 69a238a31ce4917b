// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

// Fixture dates are literals; an invalid one is a bug in the test itself.
#![allow(clippy::expect_used)]

use crate::FakeClock;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

// ── Instant factory functions ───────────────────────────────────────────────

pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid fixture instant")
}

pub fn naive(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, second)
        .expect("valid fixture time")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A wall-clock time at a fixed UTC offset, given in seconds east of UTC.
pub fn at_offset(
    offset_secs: i32,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(offset_secs)
        .expect("valid fixture offset")
        .with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
        .expect("valid fixture instant")
}

// ── Clock fixtures ──────────────────────────────────────────────────────────

/// A fake clock frozen at 2021-06-15T12:00:00Z.
pub fn frozen_clock() -> FakeClock {
    FakeClock::at(utc(2021, 6, 15, 12, 0, 0))
}
