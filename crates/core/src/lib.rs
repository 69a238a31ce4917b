// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! stamp-core: chat markup timestamps and calendar-aware durations

pub mod clock;
pub mod delta;
pub mod error;
pub mod expiry;
pub mod humanize;
pub mod parse;
pub mod timestamp;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use delta::{compute_delta, CalendarDelta};
pub use error::TimeError;
pub use expiry::{
    get_delta, to_fixed_duration, until_expiration, with_duration, with_duration_default,
    TimeFormatter, EXPIRED, PERMANENT, WITH_DURATION_MAX_UNITS,
};
pub use humanize::{humanize, HumanizeConfig, DEFAULT_MAX_UNITS, DEFAULT_PRECISION};
pub use parse::parse_duration_string;
pub use timestamp::{format_relative, normalize, render_token, Timestamp, TimestampFormat, EPOCH};
