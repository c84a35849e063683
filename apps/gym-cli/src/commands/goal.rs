// goal.rs - Goal subcommands: set, list, delete, track.

use clap::Subcommand;
use gym_config::TrackerConfig;
use gym_goal::{compare_all, Goal, GoalProgress, GoalRegistry, GoalSet, GoalStatus, NewGoal};
use gym_ledger::WorkoutLedger;
use gym_store::{parse_date_input, today};

use super::{date_notice, open_goals};

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Set the goal for an exercise, replacing any existing one.
    Set {
        /// Exercise name.
        exercise: String,
        /// Target weight in kg.
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,
        /// Target reps.
        #[arg(long, allow_negative_numbers = true)]
        reps: i64,
        /// Deadline (YYYY-MM-DD, defaults to today).
        #[arg(long, default_value = "")]
        deadline: String,
    },
    /// List goals with their positions.
    List,
    /// Delete the goal at a position shown by `gym goal list`.
    Delete {
        /// 1-based position.
        position: usize,
    },
    /// Compare every goal against the workout ledger.
    Track,
}

pub fn execute(cmd: &GoalCommands, config: &TrackerConfig) -> anyhow::Result<()> {
    let mut registry = open_goals(config)?;

    match cmd {
        GoalCommands::Set {
            exercise,
            weight,
            reps,
            deadline,
        } => {
            let outcome = set_goal(&mut registry, exercise, *weight, *reps, deadline)?;
            print!("{}", describe_set(&outcome));
        }
        GoalCommands::List => print!("{}", render_goals(registry.get_all())),
        GoalCommands::Delete { position } => {
            let removed = registry.delete(*position)?;
            println!("Deleted goal for {}.", removed.exercise);
        }
        GoalCommands::Track => {
            let entries = WorkoutLedger::open(&config.workouts_table).all();
            print!("{}", render_progress(&compare_all(registry.get_all(), &entries)));
        }
    }
    Ok(())
}

/// Parse the deadline and store the goal.
pub fn set_goal(
    registry: &mut GoalRegistry,
    exercise: &str,
    weight: f64,
    reps: i64,
    deadline: &str,
) -> anyhow::Result<GoalSet> {
    let deadline = parse_date_input(deadline, today());
    if let Some(notice) = date_notice(&deadline) {
        println!("{}", notice);
    }
    Ok(registry.set(NewGoal::new(exercise, weight, reps, deadline))?)
}

/// Confirmation shown after a goal is stored.
pub fn describe_set(outcome: &GoalSet) -> String {
    let goal = &outcome.goal;
    let verb = if outcome.replaced.is_some() { "Updated" } else { "Set" };
    let mut out = format!(
        "{} goal for {}: {:.1} kg x {} reps by {}.\n",
        verb, goal.exercise, goal.target_weight, goal.target_reps, goal.deadline
    );
    if let Some(old) = &outcome.replaced {
        out.push_str(&format!(
            "  (was {:.1} kg x {} reps by {})\n",
            old.target_weight, old.target_reps, old.deadline
        ));
    }
    out
}

/// Goal listing with 1-based positions.
pub fn render_goals(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals set.\n".to_string();
    }

    let mut out = format!(
        "{:<4} {:<26} {:>9} {:>6} {:<12}\n",
        "#", "EXERCISE", "KG", "REPS", "DEADLINE"
    );
    out.push_str(&"-".repeat(61));
    out.push('\n');
    for (i, goal) in goals.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<26} {:>9.1} {:>6} {:<12}\n",
            i + 1,
            goal.exercise,
            goal.target_weight,
            goal.target_reps,
            goal.deadline.to_string()
        ));
    }
    out
}

/// Progress report, one block per goal.
pub fn render_progress(report: &[GoalProgress]) -> String {
    if report.is_empty() {
        return "No goals set.\n".to_string();
    }

    let mut out = String::new();
    for progress in report {
        out.push_str(&format!(
            "{} (deadline {})\n",
            progress.exercise, progress.deadline
        ));
        out.push_str(&format!(
            "  weight: {:.1} / {:.1} kg{}\n",
            progress.weight_shown(),
            progress.target_weight,
            if progress.weight_met { "  met" } else { "" }
        ));
        out.push_str(&format!(
            "  reps:   {} / {}{}\n",
            progress.reps_shown(),
            progress.target_reps,
            if progress.reps_met { "  met" } else { "" }
        ));
        out.push_str(&format!("  status: {}\n", describe_status(&progress.status)));
    }

    let achieved = report.iter().filter(|p| p.is_achieved()).count();
    out.push_str(&format!("\n{}/{} goal(s) achieved.\n", achieved, report.len()));
    out
}

fn describe_status(status: &GoalStatus) -> String {
    match status {
        GoalStatus::Achieved => "achieved".to_string(),
        GoalStatus::NoData => "no data recorded before the deadline".to_string(),
        GoalStatus::Pending {
            weight_shortfall,
            reps_shortfall,
        } => {
            let mut missing = Vec::new();
            if *weight_shortfall > 0.0 {
                missing.push(format!("{:.1} kg", weight_shortfall));
            }
            if *reps_shortfall > 0 {
                missing.push(format!("{} reps", reps_shortfall));
            }
            format!("pending ({} to go)", missing.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gym_ledger::{WorkoutEntry, WorkoutSet};
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn set_goal_then_update_reports_replacement() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let mut registry = open_goals(&config).unwrap();

        let first = set_goal(&mut registry, "Sentadilla", 100.0, 5, "2024-06-01").unwrap();
        assert!(describe_set(&first).starts_with("Set goal for Sentadilla: 100.0 kg x 5 reps by 2024-06-01."));

        let second = set_goal(&mut registry, "Sentadilla", 110.0, 3, "2024-07-01").unwrap();
        let text = describe_set(&second);
        assert!(text.starts_with("Updated goal for Sentadilla"));
        assert!(text.contains("was 100.0 kg x 5 reps"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn set_goal_rejects_negative_reps() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let mut registry = open_goals(&config).unwrap();

        assert!(set_goal(&mut registry, "Remo", 60.0, -1, "2024-06-01").is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn render_goals_numbers_from_one() {
        let goals = vec![
            Goal {
                exercise: "Remo".to_string(),
                target_weight: 60.0,
                target_reps: 10,
                deadline: day(2024, 6, 1),
            },
            Goal {
                exercise: "Sentadilla".to_string(),
                target_weight: 100.0,
                target_reps: 5,
                deadline: day(2024, 6, 1),
            },
        ];
        let out = render_goals(&goals);
        let rows: Vec<&str> = out.lines().skip(2).collect();
        assert!(rows[0].starts_with("1 "));
        assert!(rows[1].starts_with("2 "));
        assert!(rows[1].contains("Sentadilla"));
        assert_eq!(render_goals(&[]), "No goals set.\n");
    }

    #[test]
    fn render_progress_shows_shortfalls() {
        let goal = Goal {
            exercise: "Squat".to_string(),
            target_weight: 100.0,
            target_reps: 5,
            deadline: day(2024, 6, 1),
        };
        let entries = vec![WorkoutEntry::Set(WorkoutSet::new(
            day(2024, 5, 20),
            "Pierna",
            "Squat",
            4,
            100.0,
        ))];
        let out = render_progress(&compare_all(&[goal], &entries));
        assert!(out.contains("weight: 100.0 / 100.0 kg  met"));
        assert!(out.contains("reps:   4 / 5\n"));
        assert!(out.contains("status: pending (1 reps to go)"));
        assert!(out.ends_with("0/1 goal(s) achieved.\n"));
    }

    #[test]
    fn no_data_status_reads_zero() {
        let goal = Goal {
            exercise: "Squat".to_string(),
            target_weight: 100.0,
            target_reps: 5,
            deadline: day(2024, 6, 1),
        };
        let out = render_progress(&compare_all(&[goal], &[]));
        assert!(out.contains("weight: 0.0 / 100.0 kg\n"));
        assert!(out.contains("status: no data recorded before the deadline"));
    }
}
