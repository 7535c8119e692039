//! Validated civil-date construction and proleptic Gregorian year tables.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// Builds a civil date from a (year, month, day) triple.
///
/// Out-of-range components are rejected rather than rolled over into the
/// next month, so `civil_date(2025, 7, 32)` is an error and not August 1.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
/// for bad components, and [`CalendarError::InvalidYear`] if the year lies
/// outside the range `chrono` can represent.
///
/// # Examples
///
/// ```
/// use weekcal_calendar::{CalendarError, civil_date};
///
/// let date = civil_date(2025, 7, 31).unwrap();
/// assert_eq!(date.to_string(), "2025-07-31");
///
/// assert_eq!(
///     civil_date(2025, 2, 29).unwrap_err(),
///     CalendarError::InvalidDay { day: 29, month: 2, max_day: 28 }
/// );
/// ```
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::InvalidYear { year })
}
