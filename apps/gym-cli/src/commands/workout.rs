// workout.rs - Workout subcommands: log, rest, sick.

use std::fmt;
use std::str::FromStr;

use clap::Subcommand;
use gym_config::{ExercisePool, TrackerConfig};
use gym_ledger::{WorkoutEntry, WorkoutLedger, WorkoutSet};
use gym_store::{parse_date_input, today};

use super::{date_notice, describe_entry, MAX_SETS};

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Record the sets of one exercise.
    Log {
        /// Routine label (e.g. "Pierna").
        #[arg(long)]
        routine: String,
        /// Exercise name.
        #[arg(long)]
        exercise: String,
        /// One set as REPSxKG (e.g. 5x100). Repeat for each set.
        #[arg(long = "set", value_name = "REPSxKG", conflicts_with_all = ["sets", "reps", "weight"])]
        set: Vec<SetSpec>,
        /// Number of identical sets (use with --reps and --weight).
        #[arg(
            long,
            requires_all = ["reps", "weight"],
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SETS))
        )]
        sets: Option<u32>,
        /// Reps per set when all sets are identical.
        #[arg(long)]
        reps: Option<u32>,
        /// Weight per set in kg when all sets are identical.
        #[arg(long)]
        weight: Option<f64>,
        /// Training day (YYYY-MM-DD, defaults to today).
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Record a rest day.
    Rest {
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Record a sick day.
    Sick {
        #[arg(long, default_value = "")]
        date: String,
    },
}

/// Reps and weight of one set, written `REPSxKG`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetSpec {
    pub reps: u32,
    pub weight: f64,
}

impl FromStr for SetSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (reps, weight) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected REPSxKG, got '{}'", s))?;
        let reps = reps
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid reps in '{}'", s))?;
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("invalid weight in '{}'", s))?;
        Ok(SetSpec { reps, weight })
    }
}

impl fmt::Display for SetSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.reps, self.weight)
    }
}

pub fn execute(cmd: &WorkoutCommands, config: &TrackerConfig) -> anyhow::Result<()> {
    let ledger = WorkoutLedger::open(&config.workouts_table);

    match cmd {
        WorkoutCommands::Log {
            routine,
            exercise,
            set,
            sets,
            reps,
            weight,
            date,
        } => {
            let specs = match (sets, reps, weight) {
                (Some(count), Some(reps), Some(weight)) => uniform_sets(*count, *reps, *weight),
                _ => set.clone(),
            };
            log_sets(&ledger, &config.exercises, date, routine, exercise, &specs)
        }
        WorkoutCommands::Rest { date } => log_day_off(&ledger, date, DayOff::Rest),
        WorkoutCommands::Sick { date } => log_day_off(&ledger, date, DayOff::Sick),
    }
}

/// `count` copies of the same set.
pub fn uniform_sets(count: u32, reps: u32, weight: f64) -> Vec<SetSpec> {
    (0..count).map(|_| SetSpec { reps, weight }).collect()
}

/// Check that an exercise may be logged under a routine from the pool.
///
/// Routines the pool doesn't know are free text. Custom routines accept any
/// exercise name; other routines only accept their own exercises.
pub fn check_exercise(pool: &ExercisePool, routine: &str, exercise: &str) -> anyhow::Result<()> {
    if let Some(known) = pool.routine(routine) {
        if !known.is_custom() && !known.exercises.iter().any(|e| e == exercise) {
            anyhow::bail!(
                "'{}' is not an exercise of routine '{}' (see `gym exercises`)",
                exercise,
                routine
            );
        }
    }
    Ok(())
}

fn log_sets(
    ledger: &WorkoutLedger,
    pool: &ExercisePool,
    date: &str,
    routine: &str,
    exercise: &str,
    specs: &[SetSpec],
) -> anyhow::Result<()> {
    if specs.is_empty() {
        anyhow::bail!("no sets given: use --set REPSxKG or --sets N --reps R --weight KG");
    }
    if specs.len() > MAX_SETS as usize {
        anyhow::bail!("too many sets: at most {} per exercise", MAX_SETS);
    }
    check_exercise(pool, routine, exercise)?;

    let date = parse_date_input(date, today());
    if let Some(notice) = date_notice(&date) {
        println!("{}", notice);
    }

    let entries: Vec<WorkoutEntry> = specs
        .iter()
        .map(|spec| {
            WorkoutEntry::Set(WorkoutSet::new(
                date.date,
                routine,
                exercise,
                spec.reps,
                spec.weight,
            ))
        })
        .collect();
    ledger.append(&entries)?;

    println!("Recorded {} set(s) of {} on {}:", entries.len(), exercise, date);
    for entry in &entries {
        println!("  {}", describe_entry(entry));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum DayOff {
    Rest,
    Sick,
}

fn log_day_off(ledger: &WorkoutLedger, date: &str, kind: DayOff) -> anyhow::Result<()> {
    let date = parse_date_input(date, today());
    if let Some(notice) = date_notice(&date) {
        println!("{}", notice);
    }

    let entry = match kind {
        DayOff::Rest => WorkoutEntry::RestDay { date: date.date },
        DayOff::Sick => WorkoutEntry::SickDay { date: date.date },
    };
    ledger.append(std::slice::from_ref(&entry))?;
    println!("Recorded {} for {}.", entry.routine().to_lowercase(), date);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct WorkoutCli {
        #[command(subcommand)]
        command: WorkoutCommands,
    }

    fn parse_uniform(sets: &str) -> Result<WorkoutCli, clap::Error> {
        WorkoutCli::try_parse_from([
            "gym", "log", "--routine", "Pierna", "--exercise", "Sentadilla", "--sets", sets,
            "--reps", "5", "--weight", "100",
        ])
    }

    #[test]
    fn set_spec_parses_reps_and_weight() {
        assert_eq!(
            "5x100".parse::<SetSpec>().unwrap(),
            SetSpec { reps: 5, weight: 100.0 }
        );
        assert_eq!(
            " 8 X 22.5 ".parse::<SetSpec>().unwrap(),
            SetSpec { reps: 8, weight: 22.5 }
        );
        assert!("5".parse::<SetSpec>().is_err());
        assert!("-5x100".parse::<SetSpec>().is_err());
        assert!("5xheavy".parse::<SetSpec>().is_err());
    }

    #[test]
    fn uniform_sets_repeat_the_same_set() {
        let sets = uniform_sets(3, 10, 40.0);
        assert_eq!(sets.len(), 3);
        assert!(sets.iter().all(|s| *s == SetSpec { reps: 10, weight: 40.0 }));
    }

    #[test]
    fn set_count_flag_is_bounded() {
        assert!(parse_uniform("3").is_ok());
        assert!(parse_uniform("100").is_ok());
        assert!(parse_uniform("0").is_err());
        assert!(parse_uniform("101").is_err());
        assert!(parse_uniform("4000000000").is_err());
    }

    #[test]
    fn log_sets_rejects_too_many_sets() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let ledger = WorkoutLedger::open(&config.workouts_table);

        let specs = vec![SetSpec { reps: 5, weight: 60.0 }; MAX_SETS as usize + 1];
        let result = log_sets(&ledger, &config.exercises, "2024-05-01", "Pierna", "Sentadilla", &specs);
        assert!(result.is_err());
        assert!(ledger.all().is_empty());
    }

    #[test]
    fn check_exercise_follows_pool() {
        let pool = ExercisePool::default();
        assert!(check_exercise(&pool, "Pierna", "Sentadilla").is_ok());
        assert!(check_exercise(&pool, "Pierna", "Remo").is_err());
        assert!(check_exercise(&pool, "Otra", "Hip Thrust").is_ok());
        assert!(check_exercise(&pool, "Cardio", "Cinta").is_ok());
    }

    #[test]
    fn log_sets_appends_one_row_per_set() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let ledger = WorkoutLedger::open(&config.workouts_table);

        log_sets(
            &ledger,
            &config.exercises,
            "2024-05-01",
            "Pierna",
            "Sentadilla",
            &[SetSpec { reps: 5, weight: 90.0 }, SetSpec { reps: 4, weight: 95.0 }],
        )
        .unwrap();

        let sets = ledger.for_exercise("Sentadilla");
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[1].weight, 95.0);
        assert_eq!(sets[0].date.to_string(), "2024-05-01");
    }

    #[test]
    fn log_sets_rejects_negative_weight_without_writing() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let ledger = WorkoutLedger::open(&config.workouts_table);

        let result = log_sets(
            &ledger,
            &config.exercises,
            "2024-05-01",
            "Pierna",
            "Sentadilla",
            &[SetSpec { reps: 5, weight: -90.0 }],
        );
        assert!(result.is_err());
        assert!(ledger.all().is_empty());
    }

    #[test]
    fn day_off_records_sentinel_entry() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let ledger = WorkoutLedger::open(&config.workouts_table);

        log_day_off(&ledger, "2024-05-02", DayOff::Sick).unwrap();
        let all = ledger.all();
        assert_eq!(all.len(), 1);
        assert!(matches!(all[0], WorkoutEntry::SickDay { .. }));
    }
}
