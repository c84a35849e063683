// mod.rs - Subcommand implementations and the helpers they share.

pub mod goal;
pub mod history;
pub mod menu;
pub mod stats;
pub mod weight;
pub mod workout;

use gym_config::TrackerConfig;
use gym_goal::GoalRegistry;
use gym_ledger::WorkoutEntry;
use gym_store::{DateInput, DateOrigin};

/// Most sets accepted for one exercise in a single entry.
pub const MAX_SETS: u32 = 100;

/// Open the goal registry, creating its table on first use.
pub fn open_goals(config: &TrackerConfig) -> anyhow::Result<GoalRegistry> {
    Ok(GoalRegistry::open(&config.goals_table)?)
}

/// Operator-facing note for a date that was substituted.
pub fn date_notice(input: &DateInput) -> Option<String> {
    match &input.origin {
        DateOrigin::Defaulted { input: raw } => Some(format!(
            "Invalid date '{}' (expected YYYY-MM-DD); using today's date {}.",
            raw, input
        )),
        DateOrigin::Supplied | DateOrigin::Today => None,
    }
}

/// One-line description of a ledger entry, used by history and confirmations.
pub fn describe_entry(entry: &WorkoutEntry) -> String {
    match entry {
        WorkoutEntry::Set(set) => format!(
            "{:<12} {:<18} {:<26} {:>5} {:>9}",
            set.date.to_string(),
            set.routine,
            set.exercise,
            set.reps,
            format!("{:.1}", set.weight)
        ),
        WorkoutEntry::RestDay { date } => format!("{:<12} rest day", date.to_string()),
        WorkoutEntry::SickDay { date } => format!("{:<12} sick day", date.to_string()),
    }
}

/// `gym exercises`
pub fn list_exercises(config: &TrackerConfig) -> anyhow::Result<()> {
    for routine in config.exercises.routines() {
        println!("{}", routine.name);
        if routine.is_custom() {
            println!("  (custom exercise names)");
        }
        for exercise in &routine.exercises {
            println!("  - {}", exercise);
        }
    }
    Ok(())
}
