// stats.rs - Retrospective views over loaded ledger entries.
//
// Pure functions: callers load the ledger once and pass the entries in.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::NaiveDate;

use crate::entry::WorkoutEntry;

/// Number of sessions recorded for one routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineCount {
    pub routine: String,
    pub sessions: usize,
}

/// Count sessions per routine, where a session is a distinct
/// `(date, routine)` pair. Rest and sick days count as sessions of their
/// sentinel routine.
///
/// Sorted by session count (descending), then routine label.
pub fn routine_distribution(entries: &[WorkoutEntry]) -> Vec<RoutineCount> {
    let sessions: HashSet<(NaiveDate, &str)> = entries
        .iter()
        .map(|entry| (entry.date(), entry.routine()))
        .collect();

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for (_, routine) in sessions {
        *counts.entry(routine).or_default() += 1;
    }

    let mut distribution: Vec<RoutineCount> = counts
        .into_iter()
        .map(|(routine, sessions)| RoutineCount {
            routine: routine.to_string(),
            sessions,
        })
        .collect();
    // BTreeMap already ordered by label; a stable sort keeps that as the tie-break.
    distribution.sort_by(|a, b| b.sessions.cmp(&a.sessions));
    distribution
}

/// Which value of a set to chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Reps,
    Weight,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Reps => write!(f, "Repeticiones"),
            Metric::Weight => write!(f, "Peso (kg)"),
        }
    }
}

/// One charted value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One point per set of `exercise`, ordered by date. Sets on the same day
/// keep their insertion order.
pub fn progression(entries: &[WorkoutEntry], exercise: &str, metric: Metric) -> Vec<ProgressPoint> {
    let mut points: Vec<ProgressPoint> = entries
        .iter()
        .filter_map(WorkoutEntry::as_set)
        .filter(|set| set.exercise == exercise)
        .map(|set| ProgressPoint {
            date: set.date,
            value: match metric {
                Metric::Reps => f64::from(set.reps),
                Metric::Weight => set.weight,
            },
        })
        .collect();
    points.sort_by_key(|point| point.date);
    points
}
