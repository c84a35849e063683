// entry.rs - Workout entries and their on-disk row form.
//
// In memory a ledger entry is either a performed set or a non-training day.
// On disk every entry is one flat row; rest and sick days are stored as
// sentinel rows whose routine and exercise are the sentinel label, with
// 0 reps and 0 kg, so older tables stay readable.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gym_store::Record;

use crate::error::LedgerError;

/// Routine label stored for a rest day.
pub const REST_DAY: &str = "Descanso";

/// Routine label stored for a sick day.
pub const SICK_DAY: &str = "Enfermo";

/// One performed set of one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSet {
    pub date: NaiveDate,
    /// Free-text routine label (e.g. "Pierna").
    pub routine: String,
    pub exercise: String,
    pub reps: u32,
    /// Kilograms.
    pub weight: f64,
}

impl WorkoutSet {
    pub fn new(
        date: NaiveDate,
        routine: impl Into<String>,
        exercise: impl Into<String>,
        reps: u32,
        weight: f64,
    ) -> Self {
        let routine: String = routine.into();
        let exercise: String = exercise.into();
        Self {
            date,
            routine: routine.trim().to_string(),
            exercise: exercise.trim().to_string(),
            reps,
            weight,
        }
    }
}

/// A ledger entry.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutEntry {
    Set(WorkoutSet),
    RestDay { date: NaiveDate },
    SickDay { date: NaiveDate },
}

impl WorkoutEntry {
    pub fn date(&self) -> NaiveDate {
        match self {
            WorkoutEntry::Set(set) => set.date,
            WorkoutEntry::RestDay { date } | WorkoutEntry::SickDay { date } => *date,
        }
    }

    /// Routine label as stored in the table.
    pub fn routine(&self) -> &str {
        match self {
            WorkoutEntry::Set(set) => &set.routine,
            WorkoutEntry::RestDay { .. } => REST_DAY,
            WorkoutEntry::SickDay { .. } => SICK_DAY,
        }
    }

    pub fn as_set(&self) -> Option<&WorkoutSet> {
        match self {
            WorkoutEntry::Set(set) => Some(set),
            _ => None,
        }
    }

    /// Check that the entry can be stored and read back unchanged.
    pub fn validate(&self) -> Result<(), LedgerError> {
        let WorkoutEntry::Set(set) = self else {
            return Ok(());
        };
        if set.exercise.trim().is_empty() {
            return Err(LedgerError::invalid("exercise name must not be blank"));
        }
        if set.routine.trim().is_empty() {
            return Err(LedgerError::invalid("routine must not be blank"));
        }
        let routine = set.routine.trim();
        if routine == REST_DAY || routine == SICK_DAY {
            return Err(LedgerError::invalid(format!(
                "'{}' is reserved for non-training days",
                set.routine
            )));
        }
        if !set.weight.is_finite() || set.weight < 0.0 {
            return Err(LedgerError::invalid(format!(
                "weight must be a non-negative number, got {}",
                set.weight
            )));
        }
        Ok(())
    }
}

/// One row of the workout table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRow {
    #[serde(rename = "Fecha")]
    pub date: NaiveDate,

    #[serde(rename = "Rutina")]
    pub routine: String,

    #[serde(rename = "Ejercicio")]
    pub exercise: String,

    #[serde(rename = "Repeticiones")]
    pub reps: u32,

    #[serde(rename = "Peso (kg)")]
    pub weight: f64,
}

impl Record for WorkoutRow {
    const COLUMNS: &'static [&'static str] =
        &["Fecha", "Rutina", "Ejercicio", "Repeticiones", "Peso (kg)"];
}

impl WorkoutRow {
    fn sentinel(date: NaiveDate, label: &str) -> Self {
        Self {
            date,
            routine: label.to_string(),
            exercise: label.to_string(),
            reps: 0,
            weight: 0.0,
        }
    }
}

impl From<&WorkoutEntry> for WorkoutRow {
    fn from(entry: &WorkoutEntry) -> Self {
        match entry {
            // The reader trims fields, so names are written trimmed too.
            WorkoutEntry::Set(set) => WorkoutRow {
                date: set.date,
                routine: set.routine.trim().to_string(),
                exercise: set.exercise.trim().to_string(),
                reps: set.reps,
                weight: set.weight,
            },
            WorkoutEntry::RestDay { date } => WorkoutRow::sentinel(*date, REST_DAY),
            WorkoutEntry::SickDay { date } => WorkoutRow::sentinel(*date, SICK_DAY),
        }
    }
}

impl TryFrom<WorkoutRow> for WorkoutEntry {
    type Error = LedgerError;

    fn try_from(row: WorkoutRow) -> Result<Self, Self::Error> {
        match row.routine.as_str() {
            REST_DAY => Ok(WorkoutEntry::RestDay { date: row.date }),
            SICK_DAY => Ok(WorkoutEntry::SickDay { date: row.date }),
            _ => {
                let entry = WorkoutEntry::Set(WorkoutSet {
                    date: row.date,
                    routine: row.routine,
                    exercise: row.exercise,
                    reps: row.reps,
                    weight: row.weight,
                });
                entry.validate()?;
                Ok(entry)
            }
        }
    }
}
