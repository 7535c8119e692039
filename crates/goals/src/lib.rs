//! # weekcal-goals
//!
//! Weekly goals on top of [`weekcal_calendar`]: each goal is stamped with the
//! week it was created in, and the queries here answer "which goals belong to
//! the week N weeks from now" without ever subtracting raw week numbers.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Instant + WeekPolicy"] -->|"Goal::create()"| B["Goal (stamped WeekIdentity)"]
//!     C["now + offset"] -->|"target_week()"| D["WeekIdentity"]
//!     B -->|"goals_for_week()"| E["goals of one week"]
//!     B -->|"weeks_with_goals()"| F["week offsets"]
//!     C -->|"WeekTracker::observe()"| G["WeekChange"]
//!     G -->|"fail_unfinished()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use weekcal_calendar::Instant;
//! use weekcal_goals::{Goal, GoalsConfig, goals_for_week, week_offset_label};
//!
//! let config = GoalsConfig::default();
//! let created = Instant::from_millis(1_752_932_126_000).unwrap(); // Sat 2025-07-19
//! let now = Instant::from_millis(1_753_092_000_000).unwrap(); // Mon 2025-07-21
//!
//! let goals = vec![Goal::create("g1", "Run 10k", created, config.policy())];
//! assert!(goals_for_week(&goals, now, 0, &config).unwrap().is_empty());
//! assert_eq!(goals_for_week(&goals, now, -1, &config).unwrap().len(), 1);
//! assert_eq!(week_offset_label(-1), "Last Week");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `goal` | Goal model and status |
//! | `query` | Week-relative goal queries and summaries |
//! | `tracker` | Week rollover detection |
//! | `label` | Week navigation labels |
//! | `config` | Configuration and TOML loading |
//! | `error` | Error types |

mod config;
mod error;
mod goal;
mod label;
mod query;
mod tracker;

pub use config::{GoalsConfig, GoalsToml, PolicyToml};
pub use error::GoalError;
pub use goal::{Goal, GoalStatus};
pub use label::{ordinal_suffix, week_header, week_offset_label};
pub use query::{
    WeekSummary, goals_for_week, recent_weeks, summarize_week, target_week, weeks_with_goals,
};
pub use tracker::{WeekChange, WeekTracker, fail_unfinished};
