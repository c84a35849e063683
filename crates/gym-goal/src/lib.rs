//! # gym-goal
//!
//! Goal tracking for the gym tracker.
//!
//! A [`Goal`] is a per-exercise target (weight, reps, deadline). The
//! [`GoalRegistry`] keeps at most one goal per exercise and rewrites its
//! table on every change. The comparator in [`progress`] reconciles goals
//! against the workout ledger as of each goal's deadline, without mutating
//! either side.
//!
//! ## Key components
//!
//! - [`GoalRegistry`]: set (last write wins), list, delete by 1-based
//!   listing position, lookup by exercise
//! - [`GoalProgress`] / [`GoalStatus`]: Achieved, Pending (with shortfalls)
//!   or NoData

pub mod error;
pub mod goal;
pub mod progress;
pub mod registry;

pub use error::GoalError;
pub use goal::{Goal, NewGoal};
pub use progress::{compare, compare_all, GoalProgress, GoalStatus};
pub use registry::{GoalRegistry, GoalSet};
