//! Epoch-millisecond instants and exact week shifts.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::CalendarError;

/// Milliseconds in one day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Milliseconds in one seven-day week.
pub const MILLIS_PER_WEEK: i64 = 7 * MILLIS_PER_DAY;

/// Largest supported distance from the epoch, roughly 31,000 years.
///
/// Keeps every instant, shifted by any UTC offset, well inside chrono's
/// date range.
pub const MAX_ABS_MILLIS: i64 = 1_000_000_000_000_000;

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A point in time, stored as milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Instant(i64);

impl Instant {
    /// Creates an instant from epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InstantOutOfRange`] if `|millis|` exceeds
    /// [`MAX_ABS_MILLIS`].
    pub fn from_millis(millis: i64) -> Result<Self, CalendarError> {
        if !(-MAX_ABS_MILLIS..=MAX_ABS_MILLIS).contains(&millis) {
            return Err(CalendarError::InstantOutOfRange { millis });
        }
        Ok(Self(millis))
    }

    /// Returns the current wall-clock instant.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InstantOutOfRange`] if the system clock is
    /// set outside the supported range.
    pub fn now() -> Result<Self, CalendarError> {
        Self::from_millis(Utc::now().timestamp_millis())
    }

    /// Returns the epoch-millisecond value.
    pub fn millis(self) -> i64 {
        self.0
    }

    /// Returns the civil date of this instant at the given UTC offset.
    ///
    /// The offset must already be validated to lie within one day of UTC,
    /// which [`crate::WeekPolicy`] guarantees.
    pub fn local_date(self, utc_offset_secs: i32) -> NaiveDate {
        let local_millis = self.0 + i64::from(utc_offset_secs) * 1000;
        let days = local_millis.div_euclid(MILLIS_PER_DAY) + UNIX_EPOCH_DAYS_FROM_CE;
        // MAX_ABS_MILLIS keeps `days` far inside both i32 and chrono's range.
        NaiveDate::from_num_days_from_ce_opt(days as i32)
            .expect("Instant range lies within chrono's date range")
    }

    /// Shifts this instant by exactly `n` seven-day weeks.
    ///
    /// See [`offset_weeks`].
    pub fn offset_weeks(self, n: i32) -> Result<Self, CalendarError> {
        offset_weeks(self, n)
    }
}

impl TryFrom<i64> for Instant {
    type Error = CalendarError;

    fn try_from(millis: i64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl From<Instant> for i64 {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

/// Shifts `instant` by exactly `n * 7` days of elapsed time.
///
/// This is plain millisecond arithmetic, not "add n weeks" on a calendar, so
/// shifting forward and back again always returns the original instant and
/// nothing drifts across month or year boundaries.
///
/// # Errors
///
/// Returns [`CalendarError::InstantOutOfRange`] if the shifted instant leaves
/// the supported range.
///
/// # Examples
///
/// ```
/// use weekcal_calendar::{Instant, offset_weeks};
///
/// let t = Instant::from_millis(1_752_932_126_000).unwrap();
/// let back = offset_weeks(offset_weeks(t, 1).unwrap(), -1).unwrap();
/// assert_eq!(back, t);
/// ```
pub fn offset_weeks(instant: Instant, n: i32) -> Result<Instant, CalendarError> {
    // |n| * MILLIS_PER_WEEK < 1.3e18 and |instant| <= 1e15, so no i64 overflow.
    let millis = instant.0 + i64::from(n) * MILLIS_PER_WEEK;
    trace!(from = instant.0, weeks = n, to = millis, "offset instant by weeks");
    Instant::from_millis(millis)
}
