//! Goal-week configuration and its TOML form.

use serde::Deserialize;
use weekcal_calendar::{WeekPolicy, Weekday};

use crate::error::GoalError;

/// Longest browsable history, in weeks (ten years).
const MAX_HISTORY_WEEKS: u32 = 520;

/// Settings for week queries over goals.
///
/// # Example
///
/// ```
/// use weekcal_calendar::WeekPolicy;
/// use weekcal_goals::GoalsConfig;
///
/// let config = GoalsConfig::new(WeekPolicy::us())
///     .with_max_goals_per_week(None)
///     .with_history_weeks(8);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GoalsConfig {
    /// Week-numbering policy used for every query.
    policy: WeekPolicy,
    /// Cap on goals returned for one week; `None` returns all.
    max_goals_per_week: Option<usize>,
    /// How many past weeks `recent_weeks` covers.
    history_weeks: u32,
}

impl GoalsConfig {
    /// Creates a configuration for `policy`.
    ///
    /// Defaults: `max_goals_per_week = Some(6)`, `history_weeks = 4`.
    pub fn new(policy: WeekPolicy) -> Self {
        Self {
            policy,
            max_goals_per_week: Some(default_max_goals_per_week()),
            history_weeks: default_history_weeks(),
        }
    }

    /// Sets the per-week goal cap.
    pub fn with_max_goals_per_week(mut self, max: Option<usize>) -> Self {
        self.max_goals_per_week = max;
        self
    }

    /// Sets the number of past weeks covered by history queries.
    pub fn with_history_weeks(mut self, weeks: u32) -> Self {
        self.history_weeks = weeks;
        self
    }

    /// Returns the week-numbering policy.
    pub fn policy(&self) -> &WeekPolicy {
        &self.policy
    }

    /// Returns the per-week goal cap.
    pub fn max_goals_per_week(&self) -> Option<usize> {
        self.max_goals_per_week
    }

    /// Returns the number of past weeks covered by history queries.
    pub fn history_weeks(&self) -> u32 {
        self.history_weeks
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the goal cap is zero or the history is longer
    /// than ten years.
    pub fn validate(&self) -> Result<(), GoalError> {
        if self.max_goals_per_week == Some(0) {
            return Err(GoalError::Config {
                reason: "max_goals_per_week must be at least 1".into(),
            });
        }
        if self.history_weeks > MAX_HISTORY_WEEKS {
            return Err(GoalError::Config {
                reason: format!("history_weeks must be at most {MAX_HISTORY_WEEKS}"),
            });
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// Every key is optional; a missing `[policy]` table means ISO weeks in
    /// UTC. `max_goals_per_week = 0` removes the cap.
    ///
    /// ```
    /// use weekcal_goals::GoalsConfig;
    ///
    /// let config = GoalsConfig::from_toml_str(
    ///     r#"
    ///     max_goals_per_week = 6
    ///
    ///     [policy]
    ///     first_day = "Sunday"
    ///     min_days = 1
    ///     utc_offset_secs = 25200
    ///     "#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.policy().min_days(), 1);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, GoalError> {
        let raw: GoalsToml = toml::from_str(text)?;
        Self::try_from(raw)
    }
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self::new(WeekPolicy::default())
    }
}

impl TryFrom<GoalsToml> for GoalsConfig {
    type Error = GoalError;

    fn try_from(raw: GoalsToml) -> Result<Self, Self::Error> {
        let policy = WeekPolicy::new(raw.policy.first_day, raw.policy.min_days)?
            .with_utc_offset_secs(raw.policy.utc_offset_secs)?;
        let max_goals_per_week = match raw.max_goals_per_week {
            0 => None,
            n => Some(n),
        };
        let config = Self::new(policy)
            .with_max_goals_per_week(max_goals_per_week)
            .with_history_weeks(raw.history_weeks);
        config.validate()?;
        Ok(config)
    }
}

/// TOML representation of [`GoalsConfig`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalsToml {
    #[serde(default = "default_max_goals_per_week")]
    pub max_goals_per_week: usize,
    #[serde(default = "default_history_weeks")]
    pub history_weeks: u32,
    #[serde(default)]
    pub policy: PolicyToml,
}

fn default_max_goals_per_week() -> usize {
    6
}
fn default_history_weeks() -> u32 {
    4
}

/// TOML representation of a [`WeekPolicy`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyToml {
    #[serde(default = "default_first_day")]
    pub first_day: Weekday,
    #[serde(default = "default_min_days")]
    pub min_days: u8,
    #[serde(default)]
    pub utc_offset_secs: i32,
}

impl Default for PolicyToml {
    fn default() -> Self {
        Self {
            first_day: default_first_day(),
            min_days: default_min_days(),
            utc_offset_secs: 0,
        }
    }
}

fn default_first_day() -> Weekday {
    Weekday::Mon
}
fn default_min_days() -> u8 {
    4
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekcal_calendar::CalendarError;

    #[test]
    fn defaults() {
        let cfg = GoalsConfig::default();
        assert_eq!(cfg.policy(), &WeekPolicy::iso());
        assert_eq!(cfg.max_goals_per_week(), Some(6));
        assert_eq!(cfg.history_weeks(), 4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = GoalsConfig::new(WeekPolicy::us())
            .with_max_goals_per_week(Some(3))
            .with_history_weeks(12);
        assert_eq!(cfg.policy(), &WeekPolicy::us());
        assert_eq!(cfg.max_goals_per_week(), Some(3));
        assert_eq!(cfg.history_weeks(), 12);
    }

    #[test]
    fn validate_rejects_zero_cap() {
        let cfg = GoalsConfig::default().with_max_goals_per_week(Some(0));
        assert!(matches!(cfg.validate(), Err(GoalError::Config { .. })));
    }

    #[test]
    fn validate_rejects_long_history() {
        let cfg = GoalsConfig::default().with_history_weeks(521);
        assert!(matches!(cfg.validate(), Err(GoalError::Config { .. })));
    }

    #[test]
    fn toml_empty_is_default() {
        let cfg = GoalsConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, GoalsConfig::default());
    }

    #[test]
    fn toml_full() {
        let cfg = GoalsConfig::from_toml_str(
            r#"
            max_goals_per_week = 0
            history_weeks = 10

            [policy]
            first_day = "Sun"
            min_days = 1
            utc_offset_secs = -18000
            "#,
        )
        .unwrap();
        assert_eq!(cfg.max_goals_per_week(), None);
        assert_eq!(cfg.history_weeks(), 10);
        assert_eq!(cfg.policy().first_day(), Weekday::Sun);
        assert_eq!(cfg.policy().min_days(), 1);
        assert_eq!(cfg.policy().utc_offset_secs(), -18_000);
    }

    #[test]
    fn toml_rejects_unknown_field() {
        let err = GoalsConfig::from_toml_str("locale = \"vi_VN\"").unwrap_err();
        assert!(matches!(err, GoalError::Toml(_)));
    }

    #[test]
    fn toml_rejects_bad_min_days() {
        let err = GoalsConfig::from_toml_str("[policy]\nmin_days = 0").unwrap_err();
        assert!(matches!(
            err,
            GoalError::Calendar(CalendarError::InvalidMinDays { min_days: 0 })
        ));
    }

    #[test]
    fn toml_rejects_bad_offset() {
        let err = GoalsConfig::from_toml_str("[policy]\nutc_offset_secs = 90000").unwrap_err();
        assert!(matches!(
            err,
            GoalError::Calendar(CalendarError::InvalidUtcOffset { secs: 90_000 })
        ));
    }

    #[test]
    fn toml_rejects_bad_weekday() {
        let err = GoalsConfig::from_toml_str("[policy]\nfirst_day = \"Someday\"").unwrap_err();
        assert!(matches!(err, GoalError::Toml(_)));
    }
}
