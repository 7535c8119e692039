//! Week rollover detection.

use tracing::info;
use weekcal_calendar::{Instant, WeekIdentity, WeekPolicy, week_identity_of};

use crate::goal::{Goal, GoalStatus};

/// Result of observing the clock with a [`WeekTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekChange {
    /// Nothing was recorded before this observation.
    FirstObservation(WeekIdentity),
    /// Still in the previously recorded week.
    SameWeek(WeekIdentity),
    /// The week changed since the last observation.
    Rolled {
        /// Last recorded week.
        from: WeekIdentity,
        /// Week of the current observation.
        to: WeekIdentity,
    },
}

/// Remembers the last observed week and reports when a new one begins.
///
/// A change of week-year alone also counts as a roll, so week 1 of two
/// different years is never mistaken for the same week.
#[derive(Debug, Clone)]
pub struct WeekTracker {
    policy: WeekPolicy,
    last: Option<WeekIdentity>,
}

impl WeekTracker {
    /// Creates a tracker with no recorded week.
    pub fn new(policy: WeekPolicy) -> Self {
        Self { policy, last: None }
    }

    /// Creates a tracker that resumes from a previously persisted week.
    pub fn resume(policy: WeekPolicy, last: WeekIdentity) -> Self {
        Self {
            policy,
            last: Some(last),
        }
    }

    /// Returns the last recorded week, if any.
    pub fn last_seen(&self) -> Option<WeekIdentity> {
        self.last
    }

    /// Records the week of `now` and reports how it relates to the last one.
    pub fn observe(&mut self, now: Instant) -> WeekChange {
        let current = week_identity_of(now, &self.policy);
        match self.last.replace(current) {
            None => WeekChange::FirstObservation(current),
            Some(last) if last == current => WeekChange::SameWeek(current),
            Some(last) => {
                info!(from = %last, to = %current, "week rolled over");
                WeekChange::Rolled {
                    from: last,
                    to: current,
                }
            }
        }
    }
}

/// Marks every active goal created before `current` as failed and returns
/// how many were changed.
pub fn fail_unfinished(goals: &mut [Goal], current: WeekIdentity) -> usize {
    let mut failed = 0;
    for goal in goals
        .iter_mut()
        .filter(|g| g.status() == GoalStatus::Active && g.week() < current)
    {
        goal.set_status(GoalStatus::Failed);
        failed += 1;
    }
    if failed > 0 {
        info!(failed, week = %current, "marked unfinished goals as failed");
    }
    failed
}
