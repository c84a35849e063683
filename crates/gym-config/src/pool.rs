// pool.rs - Predefined exercises grouped by routine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One routine and the exercises offered for it.
///
/// A routine with no exercises is a custom routine: the operator types the
/// exercise name instead of picking from a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineExercises {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<String>,
}

impl RoutineExercises {
    fn new(name: &str, exercises: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            exercises: exercises.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// True when exercise names are typed in rather than picked.
    pub fn is_custom(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// Ordered routines and their exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExercisePool {
    routines: Vec<RoutineExercises>,
}

impl ExercisePool {
    /// Build a pool, rejecting blank or duplicate routine names.
    pub fn new(routines: Vec<RoutineExercises>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for routine in &routines {
            let name = routine.name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidPool(
                    "routine names must not be blank".to_string(),
                ));
            }
            if !seen.insert(name.to_string()) {
                return Err(ConfigError::InvalidPool(format!(
                    "routine '{}' is listed more than once",
                    name
                )));
            }
        }
        Ok(Self { routines })
    }

    /// Routines in display order.
    pub fn routines(&self) -> &[RoutineExercises] {
        &self.routines
    }

    /// Look up a routine by exact name.
    pub fn routine(&self, name: &str) -> Option<&RoutineExercises> {
        self.routines.iter().find(|r| r.name == name)
    }

    /// Exercises offered for a routine, or `None` if the routine is unknown.
    pub fn exercises_for(&self, routine: &str) -> Option<&[String]> {
        self.routine(routine).map(|r| r.exercises.as_slice())
    }

    /// Every predefined exercise across all routines, first occurrence wins.
    pub fn all_exercises(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.routines
            .iter()
            .flat_map(|r| r.exercises.iter())
            .filter(|e| seen.insert(e.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl Default for ExercisePool {
    fn default() -> Self {
        Self {
            routines: vec![
                RoutineExercises::new(
                    "Pecho-Tríceps",
                    &[
                        "Banco Plano",
                        "Banco Inclinado",
                        "Pull Down Tricep",
                        "Copa",
                        "Pull Down Tricep Trenza",
                        "Copa Unilateral",
                    ],
                ),
                RoutineExercises::new(
                    "Espalda-Bíceps",
                    &[
                        "Pull Down",
                        "Remo",
                        "Pull Down Maquina",
                        "Remo Maquina",
                        "Curl Biceps",
                        "Curl con Mancuerna",
                        "Pull Down Cerrado",
                        "Dominadas",
                    ],
                ),
                RoutineExercises::new(
                    "Pierna",
                    &[
                        "Sentadilla",
                        "Leg Extension Unilateral",
                        "Curl Femoral Unilateral",
                        "Curl Femoral",
                    ],
                ),
                RoutineExercises::new("Otra", &[]),
            ],
        }
    }
}
