//! Calendar field snapshot for a single date.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::instant::Instant;
use crate::policy::WeekPolicy;
use crate::week::WeekIdentity;

/// The calendar fields of one date under one [`WeekPolicy`].
///
/// `year` is the calendar year of the date; `week.week_year()` may differ
/// from it for dates near January 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    /// Calendar year.
    pub year: i32,
    /// Month (1..=12).
    pub month: u32,
    /// Day of month (1..=31).
    pub day: u32,
    /// Weekday of the date.
    pub day_of_week: Weekday,
    /// Position of the date in its week, 1..=7 from the policy's first day.
    pub day_of_week_number: u32,
    /// Week of the month (0..=6); 0 for days before the month's first week.
    pub week_of_month: u32,
    /// Week of the year and its week-year.
    pub week: WeekIdentity,
}

impl CalendarFields {
    /// Computes the fields of `date` under `policy`.
    pub fn of_date(date: NaiveDate, policy: &WeekPolicy) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            day_of_week: date.weekday(),
            day_of_week_number: policy.day_of_week_number(date),
            week_of_month: policy.week_of_month(date),
            week: policy.week_identity_of_date(date),
        }
    }

    /// Returns the week of the year (1..=53).
    pub fn week_of_year(&self) -> u8 {
        self.week.week()
    }
}

/// Computes the calendar fields of `instant` under `policy`.
pub fn calendar_fields(instant: Instant, policy: &WeekPolicy) -> CalendarFields {
    CalendarFields::of_date(instant.local_date(policy.utc_offset_secs()), policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn july_31_2025_us() {
        let fields = CalendarFields::of_date(ymd(2025, 7, 31), &WeekPolicy::us());
        assert_eq!(fields.year, 2025);
        assert_eq!(fields.month, 7);
        assert_eq!(fields.day, 31);
        assert_eq!(fields.day_of_week, Weekday::Thu);
        assert_eq!(fields.day_of_week_number, 5);
        assert_eq!(fields.week_of_month, 5);
        assert_eq!(fields.week_of_year(), 31);
        assert_eq!(fields.week.week_year(), 2025);
    }

    #[test]
    fn august_1_2025_us() {
        let fields = CalendarFields::of_date(ymd(2025, 8, 1), &WeekPolicy::us());
        assert_eq!(fields.month, 8);
        assert_eq!(fields.day_of_week, Weekday::Fri);
        assert_eq!(fields.day_of_week_number, 6);
        assert_eq!(fields.week_of_month, 1);
        assert_eq!(fields.week_of_year(), 31);
    }

    #[test]
    fn first_week_of_august_2025_us() {
        let us = WeekPolicy::us();
        let weeks: Vec<u32> = (1..=7)
            .map(|d| CalendarFields::of_date(ymd(2025, 8, d), &us).week_of_month)
            .collect();
        assert_eq!(weeks, vec![1, 1, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn year_differs_from_week_year() {
        let fields = CalendarFields::of_date(ymd(2025, 12, 30), &WeekPolicy::iso());
        assert_eq!(fields.year, 2025);
        assert_eq!(fields.week, WeekIdentity::new(1, 2026).unwrap());
    }

    #[test]
    fn from_instant() {
        let t = Instant::from_millis(1_752_932_126_000).unwrap();
        let fields = calendar_fields(t, &WeekPolicy::us());
        assert_eq!((fields.year, fields.month, fields.day), (2025, 7, 19));
        assert_eq!(fields.day_of_week, Weekday::Sat);
        assert_eq!(fields.day_of_week_number, 7);
        assert_eq!(fields.week_of_month, 3);
        assert_eq!(fields.week_of_year(), 29);
    }
}
