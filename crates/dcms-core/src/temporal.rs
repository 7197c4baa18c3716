//! # Temporal Types — UTC-Only Timestamps and Record Age
//!
//! Defines `Timestamp`, a UTC-only timestamp truncated to seconds, and the
//! age computation used by every durational retention rule.
//!
//! ## Age Semantics
//!
//! Age is elapsed wall-clock time divided by one Julian year
//! (365.25 days, [`JULIAN_YEAR_SECONDS`]). No calendar arithmetic is done:
//! leap days are absorbed by the quarter day. The result is unfloored;
//! callers floor only for display so that thresholds are compared against
//! the exact elapsed time.
//!
//! A record dated after the evaluation instant has age `0.0`.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Seconds in a Julian year (365.25 × 86 400).
pub const JULIAN_YEAR_SECONDS: i64 = 31_557_600;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, rejecting non-UTC offsets.
/// - [`Timestamp::parse_lenient()`] — any RFC 3339 offset, converted to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    ///
    /// Only callers read the clock; evaluation always receives `now`
    /// as an argument.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 string with a `Z` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the string is not
    /// valid RFC 3339 or uses an explicit offset (even `+00:00`).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if !s.ends_with('Z') {
            return Err(ValidationError::InvalidTimestamp {
                value: s.to_string(),
                reason: "timestamp must use Z suffix (UTC only)".into(),
            });
        }
        Self::parse_lenient(s)
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// This is the parser used for caller input: clinic systems submit
    /// creation dates with local offsets.
    pub fn parse_lenient(s: &str) -> Result<Self, ValidationError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| ValidationError::InvalidTimestamp {
            value: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, ValidationError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            ValidationError::InvalidTimestamp {
                value: secs.to_string(),
                reason: "out of range Unix timestamp".into(),
            }
        })?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Elapsed Julian years from `self` until `now`, unfloored.
    ///
    /// Returns `0.0` when `self` is later than `now`.
    pub fn elapsed_years(&self, now: &Timestamp) -> f64 {
        let secs = now.epoch_secs().saturating_sub(self.epoch_secs());
        if secs <= 0 {
            return 0.0;
        }
        secs as f64 / JULIAN_YEAR_SECONDS as f64
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
