// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chat markup timestamps: `<t:1481414119:f>`.
//!
//! The chat client renders the token in the reader's own timezone and
//! locale; the style code picks the layout.

use crate::TimeError;
use chrono::{
    DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc,
    Weekday,
};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// The Unix epoch, 1970-01-01T00:00:00Z.
pub const EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

// Extended, basic and week dates, an optional `T`/space separated time of
// day in either form, then an optional offset. Forms may differ between the
// date and the time.
#[allow(clippy::expect_used)]
static ISO_8601_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<year>[0-9]{4})",
        r"(?:-(?P<month>[0-9]{2})(?:-(?P<day>[0-9]{2}))?",
        r"|(?P<basic_month>[0-9]{2})(?P<basic_day>[0-9]{2})",
        r"|-?W(?P<week>[0-9]{2})(?:-?(?P<weekday>[1-7]))?)?",
        r"(?:[Tt ]",
        r"(?:(?P<hour>[0-9]{2})(?::(?P<minute>[0-9]{2})(?::(?P<second>[0-9]{2})(?:[.,](?P<fraction>[0-9]+))?)?)?",
        r"|(?P<basic_hour>[0-9]{2})(?P<basic_minute>[0-9]{2})(?:(?P<basic_second>[0-9]{2})(?:[.,](?P<basic_fraction>[0-9]+))?)?)",
        r"(?P<offset>[Zz]|[+-][0-9]{2}(?::?[0-9]{2})?)?)?$",
    ))
    .expect("constant regex pattern is valid")
});

/// Any value that can be rendered as a timestamp.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    /// Whole POSIX seconds.
    Seconds(i64),
    /// Fractional POSIX seconds.
    Epoch(f64),
    /// ISO 8601 text, with or without an offset.
    Text(String),
    /// An aware instant, already in UTC.
    DateTime(DateTime<Utc>),
    /// A wall-clock time with no zone, taken as UTC.
    Naive(NaiveDateTime),
    /// A calendar date, taken as midnight UTC.
    Date(NaiveDate),
}

impl Timestamp {
    /// True for empty text, which callers treat like a missing value.
    pub fn is_blank(&self) -> bool {
        matches!(self, Timestamp::Text(text) if text.is_empty())
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp::Seconds(secs)
    }
}

impl From<i32> for Timestamp {
    fn from(secs: i32) -> Self {
        Timestamp::Seconds(i64::from(secs))
    }
}

impl From<u32> for Timestamp {
    fn from(secs: u32) -> Self {
        Timestamp::Seconds(i64::from(secs))
    }
}

impl From<f64> for Timestamp {
    fn from(secs: f64) -> Self {
        Timestamp::Epoch(secs)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Timestamp::Text(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Timestamp::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(instant: DateTime<Tz>) -> Self {
        Timestamp::DateTime(instant.with_timezone(&Utc))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Timestamp::Naive(naive)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Timestamp::Date(date)
    }
}

/// Convert any accepted timestamp into an aware UTC instant.
///
/// Naive values and offset-less text are assumed to be UTC. Dates are
/// midnight UTC. Fails with [`TimeError::Parse`] for text that is not
/// ISO 8601.
pub fn normalize(timestamp: impl Into<Timestamp>) -> Result<DateTime<Utc>, TimeError> {
    match timestamp.into() {
        Timestamp::Seconds(secs) => TimeDelta::try_seconds(secs)
            .and_then(|d| EPOCH.checked_add_signed(d))
            .ok_or_else(|| TimeError::OutOfRange(format!("epoch seconds {}", secs))),
        Timestamp::Epoch(secs) => from_epoch(secs),
        Timestamp::Text(text) => parse_iso8601(&text),
        Timestamp::DateTime(instant) => Ok(instant),
        Timestamp::Naive(naive) => {
            tracing::debug!(%naive, "naive datetime assumed to be UTC");
            Ok(Utc.from_utc_datetime(&naive))
        }
        Timestamp::Date(date) => Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))),
    }
}

fn from_epoch(secs: f64) -> Result<DateTime<Utc>, TimeError> {
    let whole = truncate_epoch(secs)?;
    let nanos = ((secs - secs.trunc()) * 1e9).round() as i64;
    TimeDelta::try_seconds(whole)
        .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(nanos)))
        .and_then(|d| EPOCH.checked_add_signed(d))
        .ok_or_else(|| TimeError::OutOfRange(format!("epoch seconds {}", secs)))
}

/// Whole seconds, truncated toward zero.
fn truncate_epoch(secs: f64) -> Result<i64, TimeError> {
    if !secs.is_finite() {
        return Err(TimeError::InvalidArgument(format!(
            "epoch seconds must be finite, not {}",
            secs
        )));
    }
    let whole = secs.trunc();
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange(format!("epoch seconds {}", secs)));
    }
    Ok(whole as i64)
}

fn parse_iso8601(text: &str) -> Result<DateTime<Utc>, TimeError> {
    let invalid = || TimeError::Parse(text.to_string());
    let caps = ISO_8601_PATTERN.captures(text).ok_or_else(invalid)?;
    let naive = iso_date(&caps)
        .and_then(|date| iso_date_time(&caps, date))
        .ok_or_else(invalid)?;

    let Some(offset) = caps.name("offset") else {
        if caps.name("hour").or(caps.name("basic_hour")).is_some() {
            tracing::debug!(input = text, "timestamp without offset assumed to be UTC");
        }
        return Ok(Utc.from_utc_datetime(&naive));
    };
    iso_offset(offset.as_str())
        .and_then(|offset| offset.from_local_datetime(&naive).single())
        .map(|aware| aware.with_timezone(&Utc))
        .ok_or_else(invalid)
}

/// First present capture among `names`, as a number.
fn field(caps: &Captures<'_>, names: &[&str]) -> Option<u32> {
    names
        .iter()
        .find_map(|name| caps.name(name))
        .and_then(|m| m.as_str().parse().ok())
}

fn iso_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year = i32::try_from(field(caps, &["year"])?).ok()?;
    if let Some(week) = field(caps, &["week"]) {
        let weekday = field(caps, &["weekday"]).unwrap_or(1);
        return NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?
            .checked_add_days(Days::new(u64::from(weekday - 1)));
    }
    let month = field(caps, &["month", "basic_month"]).unwrap_or(1);
    let day = field(caps, &["day", "basic_day"]).unwrap_or(1);
    NaiveDate::from_ymd_opt(year, month, day)
}

fn iso_date_time(caps: &Captures<'_>, date: NaiveDate) -> Option<NaiveDateTime> {
    let Some(hour) = field(caps, &["hour", "basic_hour"]) else {
        return Some(date.and_time(NaiveTime::MIN));
    };
    let minute = field(caps, &["minute", "basic_minute"]).unwrap_or(0);
    let second = field(caps, &["second", "basic_second"]).unwrap_or(0);
    let nanos = match caps.name("fraction").or(caps.name("basic_fraction")) {
        Some(digits) => fraction_nanos(digits.as_str())?,
        None => 0,
    };

    // 24:00 is the midnight that ends the day
    if hour == 24 {
        if minute != 0 || second != 0 || nanos != 0 {
            return None;
        }
        return Some(date.succ_opt()?.and_time(NaiveTime::MIN));
    }
    date.and_hms_nano_opt(hour, minute, second, nanos)
}

/// Decimal fraction of a second, truncated to nanoseconds.
fn fraction_nanos(digits: &str) -> Option<u32> {
    let digits = digits.get(..9).unwrap_or(digits);
    format!("{:0<9}", digits).parse().ok()
}

/// `Z`, `±HH`, `±HHMM` or `±HH:MM`.
fn iso_offset(text: &str) -> Option<FixedOffset> {
    if text.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0);
    }
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.trim_start_matches('+')),
    };
    let digits = digits.replace(':', "");
    let hours: i32 = digits.get(..2)?.parse().ok()?;
    let minutes: i32 = match digits.get(2..) {
        None | Some("") => 0,
        Some(rest) => rest.parse().ok()?,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Rendering style of a timestamp token.
///
/// Examples show the Unix epoch for a reader in UTC+1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// January 1, 1970 1:00 AM
    #[default]
    DateTime,
    /// Thursday, January 1, 1970 1:00 AM
    DayTime,
    /// 01/01/1970
    DateShort,
    /// January 1, 1970
    Date,
    /// 1:00 AM
    Time,
    /// 1:00:00 AM
    TimeSeconds,
    /// 52 years ago
    Relative,
}

impl TimestampFormat {
    pub const ALL: [TimestampFormat; 7] = [
        TimestampFormat::DateTime,
        TimestampFormat::DayTime,
        TimestampFormat::DateShort,
        TimestampFormat::Date,
        TimestampFormat::Time,
        TimestampFormat::TimeSeconds,
        TimestampFormat::Relative,
    ];

    /// Single-character style code embedded in the token.
    pub fn code(self) -> char {
        match self {
            TimestampFormat::DateTime => 'f',
            TimestampFormat::DayTime => 'F',
            TimestampFormat::DateShort => 'd',
            TimestampFormat::Date => 'D',
            TimestampFormat::Time => 't',
            TimestampFormat::TimeSeconds => 'T',
            TimestampFormat::Relative => 'R',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimestampFormat::DateTime => "date_time",
            TimestampFormat::DayTime => "day_time",
            TimestampFormat::DateShort => "date_short",
            TimestampFormat::Date => "date",
            TimestampFormat::Time => "time",
            TimestampFormat::TimeSeconds => "time_seconds",
            TimestampFormat::Relative => "relative",
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimestampFormat {
    type Err = TimeError;

    /// Accepts either the style code (`"R"`) or the name (`"relative"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| {
                s == format.name() || (s.len() == 1 && s.starts_with(format.code()))
            })
            .ok_or_else(|| {
                let codes: Vec<String> = Self::ALL.iter().map(|f| f.code().to_string()).collect();
                TimeError::InvalidArgument(format!(
                    "format can only be one of {}, not {:?}",
                    codes.join(", "),
                    s
                ))
            })
    }
}

/// Render `timestamp` as a markup token, e.g. `<t:1481414119:f>`.
///
/// Epoch seconds are truncated toward zero; other inputs go through
/// [`normalize`] first.
pub fn render_token(
    timestamp: impl Into<Timestamp>,
    format: TimestampFormat,
) -> Result<String, TimeError> {
    let epoch = match timestamp.into() {
        Timestamp::Seconds(secs) => secs,
        Timestamp::Epoch(secs) => truncate_epoch(secs)?,
        other => normalize(other)?.signed_duration_since(EPOCH).num_seconds(),
    };
    Ok(format!("<t:{}:{}>", epoch, format.code()))
}

/// Render `timestamp` as a relative token that the client keeps up to date.
pub fn format_relative(timestamp: impl Into<Timestamp>) -> Result<String, TimeError> {
    render_token(timestamp, TimestampFormat::Relative)
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
