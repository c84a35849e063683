//! # gym-config
//!
//! Where the tracker keeps its tables and which exercises it offers.
//!
//! [`TrackerConfig::for_dir`] gives the default layout inside a data
//! directory. An optional `gym.toml` in the same directory overrides file
//! names and replaces the [`ExercisePool`]. The pool is an explicit value
//! handed to the commands that need it.

pub mod config;
pub mod error;
pub mod pool;

pub use config::{FileNames, Settings, TrackerConfig, SETTINGS_FILE};
pub use error::ConfigError;
pub use pool::{ExercisePool, RoutineExercises};
