// config.rs - Tracker configuration.
//
// TrackerConfig determines where the tracker keeps its state: the workout
// ledger, the goal registry and the body-weight log.
// `for_dir()` gives the default layout inside a data directory; `load()`
// applies an optional `gym.toml` from the same directory on top.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pool::{ExercisePool, RoutineExercises};

/// Name of the optional settings file inside the data directory.
pub const SETTINGS_FILE: &str = "gym.toml";

/// File names of the persisted tables, relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNames {
    #[serde(default = "default_workouts")]
    pub workouts: String,

    #[serde(default = "default_goals")]
    pub goals: String,

    #[serde(default = "default_body_weight")]
    pub body_weight: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            workouts: default_workouts(),
            goals: default_goals(),
            body_weight: default_body_weight(),
        }
    }
}

// Serde default functions
fn default_workouts() -> String {
    "entrenamientos.csv".to_string()
}

fn default_goals() -> String {
    "goals.csv".to_string()
}

fn default_body_weight() -> String {
    "peso.csv".to_string()
}

fn default_routines() -> Vec<RoutineExercises> {
    ExercisePool::default().routines().to_vec()
}

/// Contents of `gym.toml`. Every section is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub files: FileNames,

    /// Replaces the whole default pool when present.
    #[serde(default = "default_routines")]
    pub routines: Vec<RoutineExercises>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            files: FileNames::default(),
            routines: default_routines(),
        }
    }
}

/// Resolved configuration for one data directory.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Directory holding every table.
    pub data_dir: PathBuf,

    /// Append-only workout ledger.
    pub workouts_table: PathBuf,

    /// Goal registry, rewritten in full on every change.
    pub goals_table: PathBuf,

    /// Append-only body-weight log.
    pub body_weight_table: PathBuf,

    /// Routines and exercises offered when logging workouts and setting goals.
    pub exercises: ExercisePool,
}

impl TrackerConfig {
    /// Default layout for a data directory, ignoring any settings file.
    pub fn for_dir(data_dir: impl AsRef<Path>) -> Self {
        let root = data_dir.as_ref().to_path_buf();
        Self::from_parts(root, &FileNames::default(), ExercisePool::default())
    }

    /// Layout for a data directory with `gym.toml` applied if it exists.
    pub fn load(data_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let root = data_dir.as_ref().to_path_buf();
        let settings_path = root.join(SETTINGS_FILE);
        if !settings_path.is_file() {
            return Ok(Self::for_dir(root));
        }

        let content = fs::read_to_string(&settings_path).map_err(|source| ConfigError::Io {
            path: settings_path.clone(),
            source,
        })?;
        let settings: Settings = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: settings_path.clone(),
            source,
        })?;
        let pool = ExercisePool::new(settings.routines)?;

        tracing::debug!(path = %settings_path.display(), "applied settings file");
        Ok(Self::from_parts(root, &settings.files, pool))
    }

    /// Like `load`, but falls back to the default layout on a bad settings file.
    pub fn load_or_default(data_dir: impl AsRef<Path>) -> Self {
        let root = data_dir.as_ref();
        Self::load(root).unwrap_or_else(|e| {
            tracing::warn!("ignoring settings: {}", e);
            Self::for_dir(root)
        })
    }

    fn from_parts(root: PathBuf, files: &FileNames, exercises: ExercisePool) -> Self {
        Self {
            workouts_table: root.join(&files.workouts),
            goals_table: root.join(&files.goals),
            body_weight_table: root.join(&files.body_weight),
            data_dir: root,
            exercises,
        }
    }
}
