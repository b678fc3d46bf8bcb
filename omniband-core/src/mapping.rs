//! Percent-space conversions and bound normalization.
//!
//! The slider works internally in percent space ([0, 100], decoupled from
//! pixels and from domain units). Domain values are plain `f64`s; in date
//! mode they are epoch milliseconds, so the same arithmetic covers both.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::config::{BoundInput, SliderConfig};

/// Fallback bounds when a configured bound is absent or unparseable.
pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;

/// Errors from parsing a raw bound input.
#[derive(Debug, Error)]
pub enum BoundParseError {
    #[error("invalid date bound {input:?}: {source}")]
    Date {
        input: String,
        source: chrono::ParseError,
    },
    #[error("invalid numeric bound {0:?}")]
    Number(String),
}

/// Map a domain value to percent space. Not clamped; callers clamp.
///
/// A degenerate span (`max == min`) maps everything to 0.
pub fn to_percent(value: f64, min: f64, max: f64) -> f64 {
    let total = max - min;
    if total == 0.0 {
        return 0.0;
    }
    (value - min) / total * 100.0
}

/// Map a percent-space position back to a domain value.
pub fn to_value(percent: f64, min: f64, max: f64) -> f64 {
    min + percent / 100.0 * (max - min)
}

/// Parse an ISO-like date string: `yyyy-mm-ddThh:mm`, with optional
/// seconds, or a bare `yyyy-mm-dd`.
pub fn parse_date(input: &str) -> Result<NaiveDateTime, BoundParseError> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
    }
    match chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default()),
        Err(source) => Err(BoundParseError::Date {
            input: input.to_string(),
            source,
        }),
    }
}

/// Epoch milliseconds for a naive date-time, interpreted as UTC.
pub fn epoch_ms(dt: NaiveDateTime) -> f64 {
    dt.and_utc().timestamp_millis() as f64
}

/// Inverse of [`epoch_ms`]. Out-of-range inputs collapse to the epoch.
pub fn from_epoch_ms(ms: f64) -> NaiveDateTime {
    chrono::DateTime::from_timestamp_millis(ms as i64)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

/// Resolve a raw bound input to a numeric domain value.
///
/// In date mode, strings parse as dates (to epoch ms) and numbers are taken
/// as epoch ms directly. Otherwise strings parse as floats.
pub fn resolve_bound(input: &BoundInput, is_date: bool) -> Result<f64, BoundParseError> {
    match input {
        BoundInput::Number(n) => Ok(*n),
        BoundInput::Date(s) if is_date => parse_date(s).map(epoch_ms),
        BoundInput::Date(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| BoundParseError::Number(s.clone())),
    }
}

/// Normalized numeric bounds: `min <= max`, `min <= start <= end <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub start: f64,
    pub end: f64,
}

impl Bounds {
    /// Normalize a configuration into numeric bounds.
    ///
    /// Absent or unparseable min/max fall back to the defaults; if
    /// `max < min` the minimum is coerced down to the maximum. Start/end
    /// that are absent, unparseable, out of bounds, or out of order both
    /// fall back to the full range.
    pub fn from_config(config: &SliderConfig) -> Bounds {
        let resolve = |input: &Option<BoundInput>| {
            input
                .as_ref()
                .and_then(|b| resolve_bound(b, config.is_date).ok())
        };

        let mut min = resolve(&config.min).unwrap_or(DEFAULT_MIN);
        let max = resolve(&config.max).unwrap_or(DEFAULT_MAX);
        if max < min {
            min = max;
        }

        let start = resolve(&config.start).unwrap_or(min);
        let end = resolve(&config.end).unwrap_or(max);
        if start <= end && start >= min && end <= max {
            Bounds { min, max, start, end }
        } else {
            Bounds {
                min,
                max,
                start: min,
                end: max,
            }
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
