// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Natural-language rendering of calendar deltas: `"2 years and 11 months"`.

use crate::{CalendarDelta, TimeError};
use serde::{Deserialize, Serialize};

/// Unit names, coarsest first. A precision is matched against these.
pub const UNITS: [&str; 6] = ["years", "months", "days", "hours", "minutes", "seconds"];

pub const DEFAULT_PRECISION: &str = "seconds";
pub const DEFAULT_MAX_UNITS: i32 = 6;

/// Render `delta` as a list of unit phrases, e.g. `"1 day, 2 hours and 1 second"`.
///
/// Units are walked from years down to seconds. Zero components are skipped.
/// The walk stops after the `precision` unit, or once `max_units` phrases
/// have been produced. A precision that names no unit never stops the walk.
/// When nothing is rendered the result describes zero of `precision`, e.g.
/// `"less than a minute"` or `"0 seconds"`.
///
/// Fails with [`TimeError::InvalidArgument`] when `max_units` is not positive.
pub fn humanize(
    delta: &CalendarDelta,
    precision: &str,
    max_units: i32,
) -> Result<String, TimeError> {
    let Ok(cap) = usize::try_from(max_units) else {
        return Err(max_units_error());
    };
    if cap == 0 {
        return Err(max_units_error());
    }
    if !UNITS.contains(&precision) {
        tracing::trace!(precision, "precision names no unit, bounded by max_units only");
    }

    let values = [
        delta.years(),
        delta.months(),
        delta.days(),
        delta.hours(),
        delta.minutes(),
        delta.seconds(),
    ];

    let mut phrases = Vec::new();
    for (unit, value) in UNITS.into_iter().zip(values) {
        if value != 0 {
            phrases.push(stringify_unit(value, unit));
        }
        if unit == precision || phrases.len() >= cap {
            break;
        }
    }

    Ok(match phrases.split_last() {
        None => stringify_unit(0, precision),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    })
}

fn max_units_error() -> TimeError {
    TimeError::InvalidArgument("max_units must be positive".to_string())
}

/// A value with its unit in the right plural form.
///
/// `(1, "seconds")` is `"1 second"`, `(24, "hours")` is `"24 hours"`,
/// `(0, "minutes")` is `"less than a minute"`. Only seconds render as zero.
fn stringify_unit(value: i64, unit: &str) -> String {
    let singular = unit
        .char_indices()
        .last()
        .map_or("", |(i, _)| &unit[..i]);
    match value {
        0 if unit == "seconds" => "0 seconds".to_string(),
        1 => format!("1 {}", singular),
        0 => format!("less than a {}", singular),
        _ => format!("{} {}", value, unit),
    }
}

/// Caller-chosen bounds for [`humanize`].
///
/// Deserializes from a TOML table; missing keys take the defaults
/// (`precision = "seconds"`, `max_units = 6`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanizeConfig {
    /// Smallest unit to render.
    pub precision: String,
    /// Upper bound on the number of rendered units.
    pub max_units: i32,
}

impl Default for HumanizeConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION.to_string(),
            max_units: DEFAULT_MAX_UNITS,
        }
    }
}

impl HumanizeConfig {
    pub fn new(precision: impl Into<String>, max_units: i32) -> Self {
        Self {
            precision: precision.into(),
            max_units,
        }
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, TimeError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| TimeError::InvalidArgument(format!("invalid humanize config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        if self.max_units <= 0 {
            return Err(max_units_error());
        }
        Ok(())
    }

    pub fn humanize(&self, delta: &CalendarDelta) -> Result<String, TimeError> {
        humanize(delta, &self.precision, self.max_units)
    }
}

#[cfg(test)]
#[path = "humanize_tests.rs"]
mod tests;
