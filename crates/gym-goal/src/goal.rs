// goal.rs - Goal records and goal input validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gym_store::{DateInput, Record};

use crate::error::GoalError;

/// A per-exercise target. Also the row type of the goal table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique key within the registry.
    #[serde(rename = "Ejercicio")]
    pub exercise: String,

    /// Kilograms.
    #[serde(rename = "Meta Peso (kg)")]
    pub target_weight: f64,

    #[serde(rename = "Meta Reps")]
    pub target_reps: u32,

    #[serde(rename = "Fecha Límite")]
    pub deadline: NaiveDate,
}

impl Record for Goal {
    const COLUMNS: &'static [&'static str] =
        &["Ejercicio", "Meta Peso (kg)", "Meta Reps", "Fecha Límite"];
}

impl Goal {
    /// Check invariants a stored goal must satisfy.
    pub fn validate(&self) -> Result<(), GoalError> {
        if self.exercise.trim().is_empty() {
            return Err(invalid("exercise name must not be blank"));
        }
        if !self.target_weight.is_finite() || self.target_weight < 0.0 {
            return Err(invalid(format!(
                "target weight must be a non-negative number, got {}",
                self.target_weight
            )));
        }
        Ok(())
    }
}

/// Operator input for [`GoalRegistry::set`](crate::GoalRegistry::set).
///
/// Targets are taken as signed values so that negative input is reported
/// as a validation failure instead of being unrepresentable.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub exercise: String,
    pub target_weight: f64,
    pub target_reps: i64,
    pub deadline: DateInput,
}

impl NewGoal {
    pub fn new(
        exercise: impl Into<String>,
        target_weight: f64,
        target_reps: i64,
        deadline: DateInput,
    ) -> Self {
        Self {
            exercise: exercise.into(),
            target_weight,
            target_reps,
            deadline,
        }
    }

    /// Validate and convert into a storable goal.
    pub fn into_goal(self) -> Result<Goal, GoalError> {
        let target_reps = u32::try_from(self.target_reps).map_err(|_| {
            invalid(format!(
                "target reps must be a non-negative whole number, got {}",
                self.target_reps
            ))
        })?;
        let goal = Goal {
            exercise: self.exercise.trim().to_string(),
            target_weight: self.target_weight,
            target_reps,
            deadline: self.deadline.date,
        };
        goal.validate()?;
        Ok(goal)
    }
}

fn invalid(reason: impl Into<String>) -> GoalError {
    GoalError::InvalidTarget {
        reason: reason.into(),
    }
}
