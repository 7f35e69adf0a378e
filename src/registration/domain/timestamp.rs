//! Submission timestamps rendered in ISO-8601.

use chrono::{DateTime, SecondsFormat, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instant stamped onto the form when it loads and after each accepted
/// submission.
///
/// Renders as ISO-8601 in UTC with millisecond precision and a `Z` suffix,
/// e.g. `2025-11-06T09:30:00.000Z`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use registration_form::registration::domain::Timestamp;
///
/// let instant = Utc.with_ymd_and_hms(2025, 11, 6, 9, 30, 0).unwrap();
/// assert_eq!(Timestamp::from(instant).to_string(), "2025-11-06T09:30:00.000Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Captures the current instant from the clock.
    #[must_use]
    pub fn now(clock: &impl Clock) -> Self {
        Self(clock.utc())
    }

    /// Returns the underlying instant.
    #[must_use]
    pub const fn into_inner(self) -> DateTime<Utc> {
        self.0
    }

    /// Returns the ISO-8601 form written into the timestamp field.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}
