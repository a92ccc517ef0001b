//! UTC calendar date/time with sub-minute precision.
//!
//! [`Instant`] is the canonical UTC representation used throughout the
//! engine. Birth times arrive in local civil time; `from_local` applies
//! the UTC offset that was valid at that moment (the caller resolves DST).

use serde::{Deserialize, Serialize};

use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A UTC point in time. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl Instant {
    /// Construct from UTC calendar fields.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Construct from local civil time plus the UTC offset (hours, east
    /// positive) valid at that moment.
    pub fn from_local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
    ) -> Self {
        let local_jd = calendar_to_jd(
            year,
            month,
            day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0,
        );
        Self::from_jd(local_jd - utc_offset_hours / 24.0)
    }

    /// Julian Date (UTC-based) of this instant.
    pub fn to_jd(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Construct from a Julian Date (UTC-based).
    pub fn from_jd(jd: f64) -> Self {
        let (mut year, mut month, day_frac) = jd_to_calendar(jd);
        let mut day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        // Round to whole milliseconds so that e.g. 59.9999 does not print
        // as minute 59 second 60.
        let mut total_seconds = (total_seconds * 1000.0).round() / 1000.0;
        if total_seconds >= 86_400.0 {
            // Rounding crossed midnight; carry into the next calendar day.
            total_seconds -= 86_400.0;
            let (y, m, d) = jd_to_calendar(calendar_to_jd(year, month, day as f64 + 1.0));
            year = y;
            month = m;
            day = d.floor() as u32;
        }
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}
