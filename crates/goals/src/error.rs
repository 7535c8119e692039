//! Error types for the weekcal-goals crate.

use weekcal_calendar::CalendarError;

/// Error type for all fallible operations in the weekcal-goals crate.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    /// Wraps an error from the weekcal-calendar crate.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Returned when a configuration value fails validation.
    #[error("invalid config: {reason}")]
    Config {
        /// Description of the rejected value.
        reason: String,
    },

    /// Returned when configuration text is not valid TOML for [`crate::GoalsConfig`].
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}
