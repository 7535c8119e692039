//! Week identity: the (week number, week-year) pair that names a calendar week.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::instant::Instant;
use crate::policy::WeekPolicy;

/// A calendar week under some [`WeekPolicy`]: week number 1..=53 within a
/// week-year.
///
/// The week-year is not always the calendar year of the dates in the week:
/// under ISO numbering 2025-12-29 is in week 1 of 2026. Identities from
/// different policies are not comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWeekIdentity")]
pub struct WeekIdentity {
    week: u8,
    week_year: i32,
}

#[derive(Deserialize)]
struct RawWeekIdentity {
    week: u8,
    week_year: i32,
}

impl TryFrom<RawWeekIdentity> for WeekIdentity {
    type Error = CalendarError;

    fn try_from(raw: RawWeekIdentity) -> Result<Self, Self::Error> {
        Self::new(raw.week, raw.week_year)
    }
}

impl PartialOrd for WeekIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeekIdentity {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.week_year, self.week).cmp(&(other.week_year, other.week))
    }
}

impl WeekIdentity {
    /// Creates a week identity from its parts.
    ///
    /// Only the range of `week` is checked; whether week 53 exists in
    /// `week_year` depends on the policy that produced it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeek`] if `week` is not in 1..=53.
    pub fn new(week: u8, week_year: i32) -> Result<Self, CalendarError> {
        if !(1..=53).contains(&week) {
            return Err(CalendarError::InvalidWeek { week });
        }
        Ok(Self { week, week_year })
    }

    /// Builds an identity from parts the policy arithmetic already bounds.
    pub(crate) fn from_parts(week: u8, week_year: i32) -> Self {
        debug_assert!((1..=53).contains(&week), "week {week} out of range");
        Self { week, week_year }
    }

    /// Returns the week number (1..=53).
    pub fn week(self) -> u8 {
        self.week
    }

    /// Returns the week-year.
    pub fn week_year(self) -> i32 {
        self.week_year
    }
}

impl fmt::Display for WeekIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.week_year, self.week)
    }
}

/// Computes the week identity of `instant` under `policy`.
///
/// The instant is first converted to a civil date using the policy's UTC
/// offset, then numbered with [`WeekPolicy::week_identity_of_date`].
///
/// # Examples
///
/// ```
/// use weekcal_calendar::{Instant, WeekPolicy, week_identity_of};
///
/// // Saturday 2025-07-19.
/// let t = Instant::from_millis(1_752_932_126_000).unwrap();
/// let id = week_identity_of(t, &WeekPolicy::iso());
/// assert_eq!((id.week(), id.week_year()), (29, 2025));
/// ```
pub fn week_identity_of(instant: Instant, policy: &WeekPolicy) -> WeekIdentity {
    policy.week_identity_of_date(instant.local_date(policy.utc_offset_secs()))
}

/// Returns `true` if `a` and `b` name the same week: both the week number
/// and the week-year match.
pub fn same_week(a: WeekIdentity, b: WeekIdentity) -> bool {
    a.week == b.week && a.week_year == b.week_year
}
