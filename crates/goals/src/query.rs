//! Week-relative goal queries.
//!
//! Week offsets are relative to the week containing "now": 0 is the current
//! week, -1 the previous one. An offset is turned into a target week by
//! shifting `now` by exactly `offset * 7` days and taking that instant's
//! week identity. Distances between weeks are measured with
//! [`WeekPolicy::weeks_between`], never by subtracting week numbers.

use std::collections::BTreeSet;

use tracing::debug;
use weekcal_calendar::{Instant, WeekIdentity, WeekPolicy, offset_weeks, week_identity_of};

use crate::config::GoalsConfig;
use crate::error::GoalError;
use crate::goal::{Goal, GoalStatus};

/// Returns the week `offset` weeks away from the week containing `now`.
///
/// # Errors
///
/// Returns [`GoalError::Calendar`] if the shifted instant is out of range.
pub fn target_week(
    now: Instant,
    offset: i32,
    policy: &WeekPolicy,
) -> Result<WeekIdentity, GoalError> {
    let shifted = offset_weeks(now, offset)?;
    Ok(week_identity_of(shifted, policy))
}

/// Returns the goals created in the week `offset` weeks from `now`.
///
/// Goals are ordered by position and truncated to the configured per-week
/// cap. The creation week is recomputed from `created_at` under the config's
/// policy, so the stored stamp does not need to match it and the result
/// agrees with [`weeks_with_goals`].
pub fn goals_for_week<'a>(
    goals: &'a [Goal],
    now: Instant,
    offset: i32,
    config: &GoalsConfig,
) -> Result<Vec<&'a Goal>, GoalError> {
    let policy = config.policy();
    let week = target_week(now, offset, policy)?;
    let mut selected: Vec<&Goal> = goals
        .iter()
        .filter(|g| week_identity_of(g.created_at(), policy) == week)
        .collect();
    selected.sort_by_key(|g| g.position());
    if let Some(max) = config.max_goals_per_week() {
        selected.truncate(max);
    }
    debug!(%week, offset, count = selected.len(), "selected goals for week");
    Ok(selected)
}

/// Returns the week offsets (0 or negative) that contain at least one goal,
/// newest first.
///
/// The current week (0) is always included. Goals created after the current
/// week are ignored.
pub fn weeks_with_goals(goals: &[Goal], now: Instant, policy: &WeekPolicy) -> Vec<i32> {
    let today = now.local_date(policy.utc_offset_secs());
    let mut offsets: BTreeSet<i32> = goals
        .iter()
        .map(|g| {
            let created = g.created_at().local_date(policy.utc_offset_secs());
            policy.weeks_between(today, created)
        })
        .filter(|&weeks| weeks <= 0)
        .filter_map(|weeks| i32::try_from(weeks).ok())
        .collect();
    offsets.insert(0);
    offsets.into_iter().rev().collect()
}

/// Returns `(offset, week)` for the current week and each of the
/// configured `history_weeks` weeks before it, newest first.
///
/// # Errors
///
/// Returns [`GoalError::Config`] if `config` does not validate.
pub fn recent_weeks(
    now: Instant,
    config: &GoalsConfig,
) -> Result<Vec<(i32, WeekIdentity)>, GoalError> {
    config.validate()?;
    (0..=config.history_weeks())
        .map(|back| {
            // validate() caps history_weeks far below i32::MAX.
            let offset = -(back as i32);
            target_week(now, offset, config.policy()).map(|week| (offset, week))
        })
        .collect()
}

/// Goal counts for one week, by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekSummary {
    pub active: usize,
    pub completed: usize,
    pub failed: usize,
    pub archived: usize,
}

impl WeekSummary {
    /// Total goals counted, archived ones excluded.
    pub fn total(&self) -> usize {
        self.active + self.completed + self.failed
    }
}

/// Counts the goals created in `week` by status.
pub fn summarize_week(goals: &[Goal], week: WeekIdentity) -> WeekSummary {
    goals
        .iter()
        .filter(|g| g.created_in(week))
        .fold(WeekSummary::default(), |mut summary, g| {
            match g.status() {
                GoalStatus::Active => summary.active += 1,
                GoalStatus::Completed => summary.completed += 1,
                GoalStatus::Failed => summary.failed += 1,
                GoalStatus::Archived => summary.archived += 1,
            }
            summary
        })
}
