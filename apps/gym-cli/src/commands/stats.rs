// stats.rs - Stats subcommands: routine distribution, exercise progression.

use clap::{Subcommand, ValueEnum};
use gym_config::TrackerConfig;
use gym_goal::Goal;
use gym_ledger::{progression, routine_distribution, Metric, WorkoutEntry, WorkoutLedger};

use crate::chart::{distribution_chart, progression_chart};

use super::open_goals;

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Sessions per routine across the whole ledger.
    Distribution,
    /// Weight or reps of every set of one exercise, over time.
    Progression {
        /// Exercise name.
        exercise: String,
        /// Chart only this value (both weight and reps by default).
        #[arg(long, value_enum)]
        metric: Option<MetricArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    Weight,
    Reps,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Weight => Metric::Weight,
            MetricArg::Reps => Metric::Reps,
        }
    }
}

pub fn execute(cmd: &StatsCommands, config: &TrackerConfig) -> anyhow::Result<()> {
    let entries = WorkoutLedger::open(&config.workouts_table).all();

    match cmd {
        StatsCommands::Distribution => {
            print!("{}", distribution_chart(&routine_distribution(&entries)));
        }
        StatsCommands::Progression { exercise, metric } => {
            let goals = open_goals(config)?;
            let metrics = match metric {
                Some(m) => vec![Metric::from(*m)],
                None => vec![Metric::Weight, Metric::Reps],
            };
            for (i, metric) in metrics.into_iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!(
                    "{}",
                    render_progression(&entries, exercise, metric, goals.get(exercise))
                );
            }
        }
    }
    Ok(())
}

/// Progression chart for one exercise, with the goal target drawn when the
/// exercise has a goal.
pub fn render_progression(
    entries: &[WorkoutEntry],
    exercise: &str,
    metric: Metric,
    goal: Option<&Goal>,
) -> String {
    let points = progression(entries, exercise, metric);
    let threshold = goal.map(|g| match metric {
        Metric::Weight => g.target_weight,
        Metric::Reps => f64::from(g.target_reps),
    });
    progression_chart(&format!("{}: {}", exercise, metric), &points, threshold)
}
