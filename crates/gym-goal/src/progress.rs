// progress.rs - Goal comparator.
//
// For each goal, the sets of its exercise dated on or before the deadline
// are reduced to the best weight and the best rep count (independently).
// A missing maximum never satisfies a target; it only reads as 0 when shown
// or when computing a shortfall. Reaching a target exactly counts as met.

use chrono::NaiveDate;

use gym_ledger::{WorkoutEntry, WorkoutSet};

use crate::goal::Goal;

/// Outcome of comparing one goal against the ledger.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalStatus {
    /// Both targets met by the deadline.
    Achieved,
    /// At least one target unmet. Shortfalls are 0 for met targets.
    Pending {
        weight_shortfall: f64,
        reps_shortfall: u32,
    },
    /// No set of the exercise was recorded on or before the deadline.
    NoData,
}

/// A goal together with what was achieved toward it.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub exercise: String,
    pub target_weight: f64,
    pub target_reps: u32,
    pub deadline: NaiveDate,
    pub max_weight_achieved: Option<f64>,
    pub max_reps_achieved: Option<u32>,
    pub weight_met: bool,
    pub reps_met: bool,
    pub status: GoalStatus,
}

impl GoalProgress {
    /// Best weight, reading a missing maximum as 0.
    pub fn weight_shown(&self) -> f64 {
        self.max_weight_achieved.unwrap_or(0.0)
    }

    /// Best rep count, reading a missing maximum as 0.
    pub fn reps_shown(&self) -> u32 {
        self.max_reps_achieved.unwrap_or(0)
    }

    pub fn is_achieved(&self) -> bool {
        self.status == GoalStatus::Achieved
    }
}

/// Compare one goal against ledger entries. Entries are only read.
pub fn compare(goal: &Goal, entries: &[WorkoutEntry]) -> GoalProgress {
    let selected: Vec<&WorkoutSet> = entries
        .iter()
        .filter_map(WorkoutEntry::as_set)
        .filter(|set| set.exercise == goal.exercise && set.date <= goal.deadline)
        .filter(|set| {
            let usable = set.weight.is_finite() && set.weight >= 0.0;
            if !usable {
                tracing::warn!(
                    exercise = %set.exercise,
                    date = %set.date,
                    weight = set.weight,
                    "skipping set with malformed weight"
                );
            }
            usable
        })
        .collect();

    let max_weight_achieved = selected.iter().map(|set| set.weight).reduce(f64::max);
    let max_reps_achieved = selected.iter().map(|set| set.reps).max();

    let weight_met = max_weight_achieved.is_some_and(|w| w >= goal.target_weight);
    let reps_met = max_reps_achieved.is_some_and(|r| r >= goal.target_reps);

    let status = if selected.is_empty() {
        GoalStatus::NoData
    } else if weight_met && reps_met {
        GoalStatus::Achieved
    } else {
        GoalStatus::Pending {
            weight_shortfall: if weight_met {
                0.0
            } else {
                (goal.target_weight - max_weight_achieved.unwrap_or(0.0)).max(0.0)
            },
            reps_shortfall: if reps_met {
                0
            } else {
                goal.target_reps
                    .saturating_sub(max_reps_achieved.unwrap_or(0))
            },
        }
    };

    GoalProgress {
        exercise: goal.exercise.clone(),
        target_weight: goal.target_weight,
        target_reps: goal.target_reps,
        deadline: goal.deadline,
        max_weight_achieved,
        max_reps_achieved,
        weight_met,
        reps_met,
        status,
    }
}

/// Compare every goal, in registry order.
pub fn compare_all(goals: &[Goal], entries: &[WorkoutEntry]) -> Vec<GoalProgress> {
    goals.iter().map(|goal| compare(goal, entries)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn squat_goal() -> Goal {
        Goal {
            exercise: "Squat".to_string(),
            target_weight: 100.0,
            target_reps: 5,
            deadline: day(2024, 6, 1),
        }
    }

    fn squat(date: NaiveDate, reps: u32, weight: f64) -> WorkoutEntry {
        WorkoutEntry::Set(WorkoutSet::new(date, "Pierna", "Squat", reps, weight))
    }

    #[test]
    fn achieved_ignores_sets_after_deadline() {
        let entries = vec![
            squat(day(2024, 5, 1), 5, 90.0),
            squat(day(2024, 5, 20), 5, 100.0),
            squat(day(2024, 7, 1), 6, 120.0),
        ];

        let progress = compare(&squat_goal(), &entries);
        assert_eq!(progress.status, GoalStatus::Achieved);
        assert_eq!(progress.max_weight_achieved, Some(100.0));
        assert_eq!(progress.max_reps_achieved, Some(5));
        assert!(progress.weight_met && progress.reps_met);
    }

    #[test]
    fn pending_reports_rep_shortfall() {
        let entries = vec![squat(day(2024, 5, 20), 4, 100.0)];

        let progress = compare(&squat_goal(), &entries);
        assert!(progress.weight_met);
        assert!(!progress.reps_met);
        assert_eq!(
            progress.status,
            GoalStatus::Pending {
                weight_shortfall: 0.0,
                reps_shortfall: 1
            }
        );
    }

    #[test]
    fn pending_reports_both_shortfalls() {
        let entries = vec![squat(day(2024, 5, 20), 3, 87.5)];

        let progress = compare(&squat_goal(), &entries);
        assert_eq!(
            progress.status,
            GoalStatus::Pending {
                weight_shortfall: 12.5,
                reps_shortfall: 2
            }
        );
    }

    #[test]
    fn no_data_when_nothing_before_deadline() {
        let entries = vec![
            squat(day(2024, 7, 1), 10, 150.0),
            WorkoutEntry::Set(WorkoutSet::new(day(2024, 5, 1), "Pierna", "Curl Femoral", 12, 30.0)),
        ];

        let progress = compare(&squat_goal(), &entries);
        assert_eq!(progress.status, GoalStatus::NoData);
        assert_eq!(progress.max_weight_achieved, None);
        assert_eq!(progress.max_reps_achieved, None);
        assert!(!progress.weight_met);
        assert!(!progress.reps_met);
        assert_eq!(progress.weight_shown(), 0.0);
        assert_eq!(progress.reps_shown(), 0);
    }

    #[test]
    fn zero_targets_still_need_data() {
        let goal = Goal {
            target_weight: 0.0,
            target_reps: 0,
            ..squat_goal()
        };
        let progress = compare(&goal, &[]);
        assert_eq!(progress.status, GoalStatus::NoData);
        assert!(!progress.weight_met);
        assert!(!progress.reps_met);
    }

    #[test]
    fn set_on_deadline_counts() {
        let entries = vec![squat(day(2024, 6, 1), 5, 100.0)];
        assert!(compare(&squat_goal(), &entries).is_achieved());
    }

    #[test]
    fn maxima_are_taken_independently() {
        // Heaviest set and longest set are different sets.
        let entries = vec![
            squat(day(2024, 5, 1), 8, 60.0),
            squat(day(2024, 5, 2), 1, 105.0),
        ];

        let progress = compare(&squat_goal(), &entries);
        assert_eq!(progress.max_weight_achieved, Some(105.0));
        assert_eq!(progress.max_reps_achieved, Some(8));
        assert_eq!(progress.status, GoalStatus::Achieved);
    }

    #[test]
    fn rest_days_and_other_exercises_are_ignored() {
        let entries = vec![
            WorkoutEntry::RestDay { date: day(2024, 5, 1) },
            WorkoutEntry::SickDay { date: day(2024, 5, 2) },
            WorkoutEntry::Set(WorkoutSet::new(day(2024, 5, 3), "Pierna", "squat", 10, 200.0)),
        ];
        assert_eq!(compare(&squat_goal(), &entries).status, GoalStatus::NoData);
    }

    #[test]
    fn malformed_weight_is_skipped_not_zeroed() {
        let entries = vec![
            squat(day(2024, 5, 1), 5, f64::NAN),
            squat(day(2024, 5, 2), 5, 95.0),
        ];
        let progress = compare(&squat_goal(), &entries);
        assert_eq!(progress.max_weight_achieved, Some(95.0));
    }

    #[test]
    fn compare_all_keeps_goal_order() {
        let bench = Goal {
            exercise: "Banco Plano".to_string(),
            target_weight: 80.0,
            target_reps: 8,
            deadline: day(2024, 6, 1),
        };
        let entries = vec![squat(day(2024, 5, 20), 5, 100.0)];

        let report = compare_all(&[bench, squat_goal()], &entries);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].status, GoalStatus::NoData);
        assert_eq!(report[1].status, GoalStatus::Achieved);
    }
}
