//! # gym-ledger
//!
//! The historical record of training: every performed set, rest day and
//! sick day, plus body-weight measurements.
//!
//! The ledger is append-only. Rows are never rewritten once stored, and
//! reads always reflect the table on disk in insertion order (which is not
//! necessarily chronological).
//!
//! ## Key components
//!
//! - [`WorkoutEntry`]: a performed [`WorkoutSet`], a rest day, or a sick day
//! - [`WorkoutLedger`]: append and query the workout table
//! - [`BodyWeightLog`]: append and read body-weight measurements
//! - [`stats`]: session distribution per routine and per-exercise progression

pub mod body_weight;
pub mod entry;
pub mod error;
pub mod ledger;
pub mod stats;

pub use body_weight::{BodyWeight, BodyWeightLog};
pub use entry::{WorkoutEntry, WorkoutRow, WorkoutSet, REST_DAY, SICK_DAY};
pub use error::LedgerError;
pub use ledger::WorkoutLedger;
pub use stats::{progression, routine_distribution, Metric, ProgressPoint, RoutineCount};
