//! Error types for the weekcal-calendar crate.

/// Error type for all fallible operations in the weekcal-calendar crate.
///
/// Covers rejected civil-date components, week-policy parameters outside
/// their valid ranges, and instants the calendar cannot represent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u32,
        /// The month for which the day is invalid.
        month: u32,
        /// The maximum valid day for the given month and year.
        max_day: u32,
    },

    /// Returned when a civil year lies outside the supported date range.
    #[error("invalid year: {year}")]
    InvalidYear {
        /// The year that could not be represented.
        year: i32,
    },

    /// Returned when a week number is outside the valid range 1..=53.
    #[error("invalid week: {week} (must be 1..=53)")]
    InvalidWeek {
        /// The invalid week number that was provided.
        week: u8,
    },

    /// Returned when the minimal number of days in the first week is not in 1..=7.
    #[error("invalid minimal days in first week: {min_days} (must be 1..=7)")]
    InvalidMinDays {
        /// The rejected value.
        min_days: u8,
    },

    /// Returned when a UTC offset is more than one day away from UTC.
    #[error("invalid UTC offset: {secs}s (must be within +/-86399s)")]
    InvalidUtcOffset {
        /// The rejected offset in seconds.
        secs: i32,
    },

    /// Returned when an epoch-millisecond value lies outside the supported range.
    #[error("instant out of range: {millis} ms")]
    InstantOutOfRange {
        /// The epoch-millisecond value that was rejected.
        millis: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay {
            day: 32,
            month: 1,
            max_day: 31,
        };
        assert_eq!(err.to_string(), "invalid day: 32 for month 1 (max 31)");
    }

    #[test]
    fn error_invalid_week() {
        let err = CalendarError::InvalidWeek { week: 54 };
        assert_eq!(err.to_string(), "invalid week: 54 (must be 1..=53)");
    }

    #[test]
    fn error_invalid_min_days() {
        let err = CalendarError::InvalidMinDays { min_days: 0 };
        assert_eq!(
            err.to_string(),
            "invalid minimal days in first week: 0 (must be 1..=7)"
        );
    }

    #[test]
    fn error_invalid_utc_offset() {
        let err = CalendarError::InvalidUtcOffset { secs: 90_000 };
        assert_eq!(
            err.to_string(),
            "invalid UTC offset: 90000s (must be within +/-86399s)"
        );
    }

    #[test]
    fn error_instant_out_of_range() {
        let err = CalendarError::InstantOutOfRange { millis: i64::MAX };
        assert_eq!(
            err.to_string(),
            format!("instant out of range: {} ms", i64::MAX)
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
