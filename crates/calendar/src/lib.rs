//! # weekcal-calendar
//!
//! Policy-driven week numbering for instants and civil dates.
//!
//! Every computation takes an explicit [`WeekPolicy`] (first weekday,
//! minimal days in the first week, UTC offset) instead of a locale default,
//! so the week an instant falls in is never ambiguous.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Instant (epoch ms)"] -->|".local_date(offset)"| B["NaiveDate"]
//!     T["(year, month, day)"] -->|"civil_date()"| B
//!     B -->|"WeekPolicy::week_identity_of_date()"| C["WeekIdentity"]
//!     A -->|"week_identity_of()"| C
//!     C -->|"same_week()"| D["bool"]
//!     A -->|"offset_weeks()"| A
//!     B -->|"CalendarFields::of_date()"| E["CalendarFields"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use weekcal_calendar::{Instant, WeekPolicy, civil_date, offset_weeks, same_week, week_identity_of};
//!
//! let iso = WeekPolicy::iso();
//!
//! // Dec 29, 2025 and Jan 1, 2026 share ISO week 1 of 2026.
//! let a = iso.week_identity_of_date(civil_date(2025, 12, 29).unwrap());
//! let b = iso.week_identity_of_date(civil_date(2026, 1, 1).unwrap());
//! assert!(same_week(a, b));
//! assert_eq!(a.to_string(), "2026-W01");
//!
//! // Exact week shifts round-trip.
//! let t = Instant::from_millis(1_752_932_126_000).unwrap();
//! let last_week = offset_weeks(t, -1).unwrap();
//! assert_eq!(week_identity_of(last_week, &iso).week(), 28);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Validated civil dates and Gregorian year tables |
//! | `instant` | Epoch-millisecond instants and exact week shifts |
//! | `policy` | Week-numbering policy and week arithmetic |
//! | `week` | Week identity and comparison |
//! | `fields` | Calendar field snapshot for a date |
//! | `error` | Error types |

mod date;
mod error;
mod fields;
mod instant;
mod policy;
mod week;

pub use date::{civil_date, days_in_month, days_in_year, is_leap_year};
pub use error::CalendarError;
pub use fields::{CalendarFields, calendar_fields};
pub use instant::{Instant, MAX_ABS_MILLIS, MILLIS_PER_DAY, MILLIS_PER_WEEK, offset_weeks};
pub use policy::WeekPolicy;
pub use week::{WeekIdentity, same_week, week_identity_of};

pub use chrono::{NaiveDate, Weekday};
