//! Goal model stamped with the week it was created in.

use serde::{Deserialize, Serialize};
use tracing::debug;
use weekcal_calendar::{Instant, WeekIdentity, WeekPolicy, same_week, week_identity_of};

/// Lifecycle state of a goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Still open for the week it belongs to.
    #[default]
    Active,
    /// Finished within its week.
    Completed,
    /// Left unfinished when its week ended.
    Failed,
    /// Hidden from the weekly views.
    Archived,
}

/// A weekly goal.
///
/// The creation week is computed once, from `created_at` and the policy
/// passed to [`Goal::create`], and stored alongside the timestamp. It uses
/// the week-year, so a goal made on 2025-12-30 under ISO numbering files
/// under 2026-W01 rather than week 1 of 2025.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    id: String,
    text: String,
    status: GoalStatus,
    created_at: Instant,
    position: i32,
    week: WeekIdentity,
}

impl Goal {
    /// Creates an active goal and stamps it with its creation week.
    pub fn create(
        id: impl Into<String>,
        text: impl Into<String>,
        created_at: Instant,
        policy: &WeekPolicy,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            status: GoalStatus::Active,
            created_at,
            position: -1,
            week: week_identity_of(created_at, policy),
        }
    }

    /// Sets the grid position used to order goals within a week.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> GoalStatus {
        self.status
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    /// Returns the week the goal was created in.
    pub fn week(&self) -> WeekIdentity {
        self.week
    }

    /// Updates the status.
    pub fn set_status(&mut self, status: GoalStatus) {
        self.status = status;
    }

    /// Returns `true` if the goal was created in `week`.
    pub fn created_in(&self, week: WeekIdentity) -> bool {
        same_week(self.week, week)
    }

    /// Recomputes the creation week under `policy`.
    ///
    /// Used when goals stamped under another policy (or by an older
    /// calendar-year scheme) are moved to a new one. Returns `true` if the
    /// stored week changed.
    pub fn restamp(&mut self, policy: &WeekPolicy) -> bool {
        let week = week_identity_of(self.created_at, policy);
        if week == self.week {
            return false;
        }
        debug!(id = %self.id, from = %self.week, to = %week, "restamped goal week");
        self.week = week;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekcal_calendar::Weekday;

    const CREATED: i64 = 1_752_932_126_000; // Sat 2025-07-19

    #[test]
    fn create_stamps_week() {
        let t = Instant::from_millis(CREATED).unwrap();
        let goal = Goal::create("g1", "Run 10k", t, &WeekPolicy::iso());
        assert_eq!(goal.id(), "g1");
        assert_eq!(goal.text(), "Run 10k");
        assert_eq!(goal.status(), GoalStatus::Active);
        assert_eq!(goal.position(), -1);
        assert_eq!(goal.created_at(), t);
        assert_eq!(goal.week(), WeekIdentity::new(29, 2025).unwrap());
    }

    #[test]
    fn create_uses_week_year() {
        // 2025-12-30T09:00:00Z
        let t = Instant::from_millis(1_767_085_200_000).unwrap();
        let goal = Goal::create("g", "Plan 2026", t, &WeekPolicy::iso());
        assert_eq!(goal.week(), WeekIdentity::new(1, 2026).unwrap());
    }

    #[test]
    fn builders() {
        let t = Instant::from_millis(CREATED).unwrap();
        let goal = Goal::create("g", "Read", t, &WeekPolicy::iso())
            .with_position(3)
            .with_status(GoalStatus::Completed);
        assert_eq!(goal.position(), 3);
        assert_eq!(goal.status(), GoalStatus::Completed);
    }

    #[test]
    fn created_in() {
        let t = Instant::from_millis(CREATED).unwrap();
        let goal = Goal::create("g", "Read", t, &WeekPolicy::iso());
        assert!(goal.created_in(WeekIdentity::new(29, 2025).unwrap()));
        assert!(!goal.created_in(WeekIdentity::new(30, 2025).unwrap()));
        assert!(!goal.created_in(WeekIdentity::new(29, 2024).unwrap()));
    }

    #[test]
    fn restamp_changes_only_when_needed() {
        // Sunday 2025-07-20: ISO week 29, US week 30.
        let t = Instant::from_millis(1_753_005_600_000).unwrap();
        let mut goal = Goal::create("g", "Swim", t, &WeekPolicy::iso());
        assert_eq!(goal.week().week(), 29);
        assert!(!goal.restamp(&WeekPolicy::iso()));
        assert!(goal.restamp(&WeekPolicy::us()));
        assert_eq!(goal.week().week(), 30);

        let saturday_first = WeekPolicy::new(Weekday::Sat, 1).unwrap();
        assert!(!goal.restamp(&saturday_first));
    }

    #[test]
    fn status_serializes_snake_case() {
        #[derive(Serialize, Deserialize)]
        struct Row {
            status: GoalStatus,
        }
        let text = toml::to_string(&Row {
            status: GoalStatus::Completed,
        })
        .unwrap();
        assert_eq!(text.trim(), "status = \"completed\"");
        let back: Row = toml::from_str("status = \"archived\"").unwrap();
        assert_eq!(back.status, GoalStatus::Archived);
    }

    #[test]
    fn goal_round_trips_through_toml() {
        let t = Instant::from_millis(CREATED).unwrap();
        let goal = Goal::create("g", "Read", t, &WeekPolicy::iso()).with_position(2);
        let text = toml::to_string(&goal).unwrap();
        let back: Goal = toml::from_str(&text).unwrap();
        assert_eq!(back, goal);
    }
}
