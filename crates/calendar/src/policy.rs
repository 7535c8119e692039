//! Week-numbering policy and the week arithmetic derived from it.
//!
//! A policy fixes three things the platform calendars usually take from the
//! locale: which weekday opens a week, how many days of a new year (or
//! month) the first week must hold, and the UTC offset used to turn an
//! instant into a civil date.
//!
//! # Year-boundary rule
//!
//! Week 1 of year `Y` is the first policy week containing at least
//! `min_days` days of `Y`. Days before it belong to the last week of `Y - 1`,
//! and days on or after week 1 of `Y + 1` belong to that week. Under the ISO
//! policy (Monday, 4) this is the "first Thursday" rule; under the US policy
//! (Sunday, 1) the week containing January 1 is always week 1, so the last
//! days of December can be week 1 of the next year.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::date::days_in_year;
use crate::error::CalendarError;
use crate::week::WeekIdentity;

/// Largest accepted UTC offset magnitude in seconds.
const MAX_UTC_OFFSET_SECS: i32 = 86_399;

/// Explicit week-numbering policy.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use weekcal_calendar::WeekPolicy;
///
/// let policy = WeekPolicy::new(Weekday::Sat, 1)
///     .unwrap()
///     .with_utc_offset_secs(3 * 3600)
///     .unwrap();
/// assert_eq!(policy.first_day(), Weekday::Sat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekPolicy {
    first_day: Weekday,
    min_days: u8,
    utc_offset_secs: i32,
}

impl WeekPolicy {
    /// Creates a policy with the given first weekday and minimal days in the
    /// first week, evaluated in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMinDays`] if `min_days` is not in 1..=7.
    pub fn new(first_day: Weekday, min_days: u8) -> Result<Self, CalendarError> {
        if !(1..=7).contains(&min_days) {
            return Err(CalendarError::InvalidMinDays { min_days });
        }
        Ok(Self {
            first_day,
            min_days,
            utc_offset_secs: 0,
        })
    }

    /// ISO 8601: weeks start on Monday, week 1 holds the first Thursday.
    pub fn iso() -> Self {
        Self {
            first_day: Weekday::Mon,
            min_days: 4,
            utc_offset_secs: 0,
        }
    }

    /// US convention: weeks start on Sunday, week 1 holds January 1.
    pub fn us() -> Self {
        Self {
            first_day: Weekday::Sun,
            min_days: 1,
            utc_offset_secs: 0,
        }
    }

    /// Sets the UTC offset used to convert instants to civil dates.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidUtcOffset`] if `|secs|` is a day or more.
    pub fn with_utc_offset_secs(mut self, secs: i32) -> Result<Self, CalendarError> {
        if !(-MAX_UTC_OFFSET_SECS..=MAX_UTC_OFFSET_SECS).contains(&secs) {
            return Err(CalendarError::InvalidUtcOffset { secs });
        }
        self.utc_offset_secs = secs;
        Ok(self)
    }

    /// Returns the weekday that opens each week.
    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// Returns the minimal number of days of a year (or month) that its
    /// first week must contain.
    pub fn min_days(&self) -> u8 {
        self.min_days
    }

    /// Returns the UTC offset in seconds.
    pub fn utc_offset_secs(&self) -> i32 {
        self.utc_offset_secs
    }

    /// Days from the policy's first weekday to `weekday` (0..=6).
    fn position(&self, weekday: Weekday) -> i64 {
        let day = i64::from(weekday.num_days_from_monday());
        let first = i64::from(self.first_day.num_days_from_monday());
        (day - first).rem_euclid(7)
    }

    /// Offset, in days from the first day of a period, at which week 1 of
    /// that period starts. `period_start_position` is the week position of
    /// the period's first day. Negative when week 1 starts in the previous
    /// period.
    fn first_week_start(&self, period_start_position: i64) -> i64 {
        if 7 - period_start_position >= i64::from(self.min_days) {
            -period_start_position
        } else {
            7 - period_start_position
        }
    }

    /// Returns the day-of-week number of `date`, 1..=7 counted from the
    /// policy's first weekday.
    pub fn day_of_week_number(&self, date: NaiveDate) -> u32 {
        self.position(date.weekday()) as u32 + 1
    }

    /// Returns the days left in the week of `date`, counting `date` itself.
    pub fn days_left_in_week(&self, date: NaiveDate) -> u32 {
        8 - self.day_of_week_number(date)
    }

    /// Returns the first day of the policy week containing `date`, or `None`
    /// if that day falls before the earliest date chrono can represent.
    pub fn week_start(&self, date: NaiveDate) -> Option<NaiveDate> {
        let position = self.position(date.weekday()) as u64;
        date.checked_sub_days(chrono::Days::new(position))
    }

    /// Returns the whole number of policy weeks from the week containing
    /// `from` to the week containing `to`.
    ///
    /// Both dates are first moved to the start of their week, so the result
    /// depends only on which weeks the dates fall in, never on week numbers.
    /// It is positive when `to` lies in a later week.
    pub fn weeks_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        let from_start = i64::from(from.num_days_from_ce()) - self.position(from.weekday());
        let to_start = i64::from(to.num_days_from_ce()) - self.position(to.weekday());
        (to_start - from_start).div_euclid(7)
    }

    /// Returns the week of the month of `date` (0..=6).
    ///
    /// Week 1 of a month is the first policy week holding at least
    /// `min_days` days of that month; the days before it are week 0. With
    /// `min_days == 1` the first of the month is always in week 1.
    pub fn week_of_month(&self, date: NaiveDate) -> u32 {
        let day0 = i64::from(date.day0());
        let month_start_position = (self.position(date.weekday()) - day0).rem_euclid(7);
        let start = self.first_week_start(month_start_position);
        if day0 < start {
            0
        } else {
            ((day0 - start) / 7 + 1) as u32
        }
    }

    /// Returns the week identity of a civil date under this policy.
    ///
    /// See the module documentation for the year-boundary rule.
    pub fn week_identity_of_date(&self, date: NaiveDate) -> WeekIdentity {
        let year = date.year();
        let ordinal0 = i64::from(date.ordinal0());
        let jan1_position = (self.position(date.weekday()) - ordinal0).rem_euclid(7);
        let start = self.first_week_start(jan1_position);

        if ordinal0 < start {
            // Before week 1: last week of the previous week-year.
            let prev_len = i64::from(days_in_year(year - 1));
            let prev_jan1_position = (jan1_position - prev_len).rem_euclid(7);
            let prev_start = self.first_week_start(prev_jan1_position);
            let week = (ordinal0 + prev_len - prev_start) / 7 + 1;
            debug!(%date, week, week_year = year - 1, "date belongs to previous week-year");
            return WeekIdentity::from_parts(week as u8, year - 1);
        }

        let len = i64::from(days_in_year(year));
        let next_jan1_position = (jan1_position + len).rem_euclid(7);
        let next_start = len + self.first_week_start(next_jan1_position);
        if ordinal0 >= next_start {
            debug!(%date, week_year = year + 1, "date belongs to week 1 of next week-year");
            return WeekIdentity::from_parts(1, year + 1);
        }

        let week = (ordinal0 - start) / 7 + 1;
        WeekIdentity::from_parts(week as u8, year)
    }
}

impl Default for WeekPolicy {
    fn default() -> Self {
        Self::iso()
    }
}
