//! Display labels for week navigation.

use chrono::{Datelike, NaiveDate};
use weekcal_calendar::WeekPolicy;

/// Names a week offset relative to the current week.
///
/// ```
/// use weekcal_goals::week_offset_label;
///
/// assert_eq!(week_offset_label(0), "Current Week");
/// assert_eq!(week_offset_label(-1), "Last Week");
/// assert_eq!(week_offset_label(-3), "3 Weeks Ago");
/// ```
pub fn week_offset_label(offset: i32) -> String {
    match offset {
        0 => "Current Week".to_string(),
        -1 => "Last Week".to_string(),
        o if o < -1 => format!("{} Weeks Ago", o.unsigned_abs()),
        _ => "Future Week".to_string(),
    }
}

/// English ordinal suffix for `n`: 1st, 2nd, 3rd, 4th, 11th, 21st, 112th.
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Heading for the week containing `date`, such as `"5th Week of Jul 2025"`.
///
/// Uses the week of the month. When `date` falls before the month's first
/// week (week 0, possible when `min_days > 1`), the week is named after the
/// previous month, where it is the last week.
pub fn week_header(date: NaiveDate, policy: &WeekPolicy) -> String {
    let (anchor, week) = match policy.week_of_month(date) {
        0 => date
            .with_day(1)
            .and_then(|first| first.pred_opt())
            .map_or((date, 0), |end| (end, policy.week_of_month(end))),
        week => (date, week),
    };
    format!(
        "{week}{} Week of {} {}",
        ordinal_suffix(week),
        anchor.format("%b"),
        anchor.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn offset_labels() {
        assert_eq!(week_offset_label(0), "Current Week");
        assert_eq!(week_offset_label(-1), "Last Week");
        assert_eq!(week_offset_label(-2), "2 Weeks Ago");
        assert_eq!(week_offset_label(-52), "52 Weeks Ago");
        assert_eq!(week_offset_label(1), "Future Week");
        assert_eq!(week_offset_label(i32::MIN), "2147483648 Weeks Ago");
    }

    #[test]
    fn ordinal_suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (101, "st"),
            (111, "th"),
            (0, "th"),
        ];
        for (n, suffix) in cases {
            assert_eq!(ordinal_suffix(n), suffix, "n = {n}");
        }
    }

    #[test]
    fn header_us() {
        let us = WeekPolicy::us();
        assert_eq!(week_header(ymd(2025, 7, 31), &us), "5th Week of Jul 2025");
        assert_eq!(week_header(ymd(2025, 8, 1), &us), "1st Week of Aug 2025");
        assert_eq!(week_header(ymd(2025, 8, 3), &us), "2nd Week of Aug 2025");
    }

    #[test]
    fn header_week_zero_uses_previous_month() {
        let iso = WeekPolicy::iso();
        // ISO: Aug 1-3 2025 are in the week of Mon Jul 28, July's 5th week.
        assert_eq!(iso.week_of_month(ymd(2025, 8, 1)), 0);
        assert_eq!(week_header(ymd(2025, 8, 1), &iso), "5th Week of Jul 2025");
        assert_eq!(week_header(ymd(2025, 8, 4), &iso), "1st Week of Aug 2025");
    }

    #[test]
    fn header_week_zero_in_january_uses_december() {
        let iso = WeekPolicy::iso();
        // 2027-01-01 is a Friday; Jan 1-3 belong to December 2026's last week.
        assert_eq!(week_header(ymd(2027, 1, 2), &iso), "5th Week of Dec 2026");
    }
}
