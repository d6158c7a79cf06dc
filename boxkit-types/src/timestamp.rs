//! Timestamps as reported by the remote API.
//!
//! The API emits ISO 8601 date-times with an explicit offset
//! (`2012-12-12T10:53:43-08:00`). A handful of older endpoints drop the colon
//! in the offset or send a bare date; both are accepted.

use crate::Error;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signature of the function used to turn a timestamp string into a [`Timestamp`].
///
/// Decoders take one of these so callers can swap in a stricter or more
/// lenient parser without touching the field tables.
pub type TimestampParser = fn(&str) -> Result<Timestamp, Error>;

/// A point in time with the offset it was reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Parses an ISO 8601 timestamp.
    ///
    /// Fails with [`Error::InvalidTimestamp`] carrying the offending text.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let text = text.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(dt));
        }

        if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%z") {
            return Ok(Self(dt));
        }

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(midnight.and_utc().fixed_offset()));
            }
        }

        Err(Error::InvalidTimestamp(text.to_owned()))
    }

    /// Creates a timestamp from an existing date-time.
    #[must_use]
    pub const fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    /// Returns the date-time with its original offset.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Returns the same instant in UTC.
    #[must_use]
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
