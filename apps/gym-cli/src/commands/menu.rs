// menu.rs - Interactive session: `gym menu`.
//
// Every prompt accepts `0` (or end of input) as "go back", except goal
// targets, where 0 is a valid answer and a blank line goes back. Going back
// discards whatever was entered in the current flow; nothing is written
// until the operator confirms. Errors from one action are reported and the
// session continues, except permission failures on the data files, which end
// the session.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use gym_config::{RoutineExercises, TrackerConfig};
use gym_goal::{compare_all, GoalError, GoalRegistry, NewGoal};
use gym_ledger::{
    routine_distribution, BodyWeightLog, LedgerError, Metric, WorkoutEntry, WorkoutLedger,
    WorkoutSet, REST_DAY, SICK_DAY,
};
use gym_store::{parse_date_input, today, DateInput, StoreError};

use crate::chart::distribution_chart;
use crate::prompt::Prompter;

use super::goal::{describe_set, render_goals, render_progress};
use super::history::render_day;
use super::stats::render_progression;
use super::{date_notice, open_goals, MAX_SETS};

pub fn execute(config: &TrackerConfig) -> anyhow::Result<()> {
    let mut prompter = Prompter::stdio();
    run(&mut prompter, config, today())
}

/// Main menu loop. Returns when the operator exits or input ends.
pub fn run<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    config: &TrackerConfig,
    today: NaiveDate,
) -> anyhow::Result<()> {
    loop {
        p.say("\n=== Gym Tracker ===")?;
        p.say("1. Log workout")?;
        p.say("2. Log body weight")?;
        p.say("3. Statistics and charts")?;
        p.say("4. Workout history")?;
        p.say("5. Goals")?;
        p.say("6. Exit")?;

        let Some(choice) = p.read_int("Choose an option: ")? else {
            break;
        };
        let result = match choice {
            1 => log_workout(p, config, today),
            2 => log_body_weight(p, config, today),
            3 => stats_menu(p, config),
            4 => show_history(p, config, today),
            5 => goals_menu(p, config, today),
            6 => break,
            _ => {
                p.say("Invalid option, try again.")?;
                continue;
            }
        };
        recover(p, result)?;
    }

    p.say("See you next time. Keep training hard!")?;
    Ok(())
}

/// Report a non-fatal error and carry on; hand fatal ones back.
fn recover<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    result: anyhow::Result<()>,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if is_fatal(&e) => Err(e),
        Err(e) => {
            tracing::debug!("menu action failed: {:#}", e);
            p.say(format!("Error: {:#}", e))?;
            Ok(())
        }
    }
}

fn is_fatal(err: &anyhow::Error) -> bool {
    if let Some(e) = err.downcast_ref::<GoalError>() {
        return e.is_fatal();
    }
    if let Some(e) = err.downcast_ref::<LedgerError>() {
        return e.is_fatal();
    }
    if let Some(e) = err.downcast_ref::<StoreError>() {
        return e.is_fatal();
    }
    // Terminal I/O failures.
    err.downcast_ref::<std::io::Error>().is_some()
}

fn back<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> anyhow::Result<()> {
    p.say("Going back...")?;
    Ok(())
}

/// Ask for a date; blank means today, `0` means back.
fn ask_date<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompt: &str,
    today: NaiveDate,
) -> anyhow::Result<Option<DateInput>> {
    let Some(line) = p.read_line(prompt)? else {
        return Ok(None);
    };
    if line == "0" {
        return Ok(None);
    }
    let date = parse_date_input(&line, today);
    if let Some(notice) = date_notice(&date) {
        p.say(notice)?;
    }
    Ok(Some(date))
}

/// Non-negative whole number, asked again until valid.
fn read_count<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompt: &str,
) -> anyhow::Result<Option<u32>> {
    loop {
        let Some(value) = p.read_int(prompt)? else {
            return Ok(None);
        };
        match u32::try_from(value) {
            Ok(count) => return Ok(Some(count)),
            Err(_) => p.say("Please enter a number of 0 or more.")?,
        }
    }
}

/// Number of sets, asked again until it is at most `MAX_SETS`.
fn read_set_count<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompt: &str,
) -> anyhow::Result<Option<u32>> {
    loop {
        let Some(count) = read_count(p, prompt)? else {
            return Ok(None);
        };
        if count <= MAX_SETS {
            return Ok(Some(count));
        }
        p.say(format!("At most {} sets per exercise.", MAX_SETS))?;
    }
}

/// Goal target where `0` is a valid answer; a blank line goes back.
fn read_target<T: FromStr, R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompt: &str,
) -> anyhow::Result<Option<T>> {
    loop {
        let Some(line) = p.read_line(prompt)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(None);
        }
        match line.replace(',', ".").parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => p.say("Please enter a number, or leave it blank to go back.")?,
        }
    }
}

/// Weight in kg, asked again until non-negative.
fn read_weight<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompt: &str,
) -> anyhow::Result<Option<f64>> {
    loop {
        let Some(value) = p.read_f64(prompt)? else {
            return Ok(None);
        };
        if value >= 0.0 {
            return Ok(Some(value));
        }
        p.say("Weight cannot be negative.")?;
    }
}

// Workout logging

enum RoutineChoice<'a> {
    Training(&'a RoutineExercises),
    Rest,
    Sick,
}

fn log_workout<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    config: &TrackerConfig,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let Some(date) = ask_date(p, "Date (YYYY-MM-DD, blank for today, 0 to go back): ", today)?
    else {
        return back(p);
    };
    let Some(routine) = choose_routine(p, config.exercises.routines())? else {
        return back(p);
    };
    let ledger = WorkoutLedger::open(&config.workouts_table);

    let routine = match routine {
        RoutineChoice::Rest | RoutineChoice::Sick => {
            let entry = match routine {
                RoutineChoice::Sick => WorkoutEntry::SickDay { date: date.date },
                _ => WorkoutEntry::RestDay { date: date.date },
            };
            p.say(format!(
                "\nNo training on {}: {}.",
                date,
                entry.routine().to_lowercase()
            ))?;
            if p.confirm("Save this day? (s/n): ")? {
                ledger.append(std::slice::from_ref(&entry))?;
                p.say(format!("Recorded {} for {}.", entry.routine().to_lowercase(), date))?;
            } else {
                p.say("Nothing saved.")?;
            }
            return Ok(());
        }
        RoutineChoice::Training(routine) => routine,
    };

    let exercises = if routine.is_custom() {
        match p.read_line("Custom exercise name (0 to go back): ")? {
            None => return back(p),
            Some(name) if name == "0" => return back(p),
            Some(name) if name.is_empty() => {
                p.say("No exercise name given.")?;
                return Ok(());
            }
            Some(name) => vec![name],
        }
    } else {
        match choose_exercises(p, &routine.exercises)? {
            Some(selected) => selected,
            None => return back(p),
        }
    };

    let mut entries = Vec::new();
    for exercise in &exercises {
        let Some(sets) = read_sets(p, exercise)? else {
            return back(p);
        };
        entries.extend(sets.into_iter().map(|(reps, weight)| {
            WorkoutEntry::Set(WorkoutSet::new(
                date.date,
                &routine.name,
                exercise.as_str(),
                reps,
                weight,
            ))
        }));
    }
    if entries.is_empty() {
        p.say("No sets entered; nothing to save.")?;
        return Ok(());
    }

    p.say(format!("\nWorkout for {} on {}:", routine.name, date))?;
    for exercise in &exercises {
        p.say(format!("Exercise: {}", exercise))?;
        for set in entries
            .iter()
            .filter_map(WorkoutEntry::as_set)
            .filter(|s| &s.exercise == exercise)
        {
            p.say(format!("  Reps: {} | Weight: {} kg", set.reps, set.weight))?;
        }
    }

    if p.confirm("\nSave this workout? (s/n): ")? {
        ledger.append(&entries)?;
        p.say(format!("Saved {} set(s).", entries.len()))?;
    } else {
        p.say("Workout discarded.")?;
    }
    Ok(())
}

fn choose_routine<'a, R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    routines: &'a [RoutineExercises],
) -> anyhow::Result<Option<RoutineChoice<'a>>> {
    let rest = routines.len() + 1;
    let sick = routines.len() + 2;
    loop {
        p.say("Choose the routine:")?;
        for (i, routine) in routines.iter().enumerate() {
            p.say(format!("{}. {}", i + 1, routine.name))?;
        }
        p.say(format!("{}. {}", rest, REST_DAY))?;
        p.say(format!("{}. {}", sick, SICK_DAY))?;
        p.say("0. Back")?;

        let Some(choice) = p.read_int(&format!("Option (0-{}): ", sick))? else {
            return Ok(None);
        };
        let choice = match usize::try_from(choice) {
            Ok(0) => return Ok(None),
            Ok(n) if n == rest => RoutineChoice::Rest,
            Ok(n) if n == sick => RoutineChoice::Sick,
            Ok(n) if n <= routines.len() => RoutineChoice::Training(&routines[n - 1]),
            _ => {
                p.say("Invalid option, try again.")?;
                continue;
            }
        };
        return Ok(Some(choice));
    }
}

/// Pick exercises by number, e.g. `1,3`. Invalid numbers are skipped.
fn choose_exercises<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    exercises: &[String],
) -> anyhow::Result<Option<Vec<String>>> {
    loop {
        p.say("Choose the exercises you did:")?;
        for (i, exercise) in exercises.iter().enumerate() {
            p.say(format!("{}. {}", i + 1, exercise))?;
        }
        p.say("0. Back")?;

        let Some(line) = p.read_line("Exercises (e.g. 1,3): ")? else {
            return Ok(None);
        };
        let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        if tokens.contains(&"0") {
            return Ok(None);
        }

        let mut selected = Vec::new();
        for token in tokens {
            match token
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| exercises.get(i))
            {
                Some(exercise) => selected.push(exercise.clone()),
                None => p.say(format!("Skipping invalid selection '{}'.", token))?,
            }
        }
        if !selected.is_empty() {
            return Ok(Some(selected));
        }
    }
}

/// Sets of one exercise as (reps, weight) pairs.
fn read_sets<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    exercise: &str,
) -> anyhow::Result<Option<Vec<(u32, f64)>>> {
    let Some(count) = read_set_count(p, &format!("Number of sets for {}: ", exercise))? else {
        return Ok(None);
    };
    if count == 0 {
        return Ok(Some(Vec::new()));
    }

    let Some(same_weight) =
        p.yes_no_back("Same weight for every set? (s/n, 0 to go back): ")?
    else {
        return Ok(None);
    };

    if same_weight {
        let Some(reps) = read_count(p, "Reps per set: ")? else {
            return Ok(None);
        };
        let Some(weight) = read_weight(p, "Weight used (kg): ")? else {
            return Ok(None);
        };
        return Ok(Some(vec![(reps, weight); count as usize]));
    }

    let mut sets = Vec::new();
    for i in 1..=count {
        let Some(reps) = read_count(p, &format!("Reps for set {}: ", i))? else {
            return Ok(None);
        };
        let Some(weight) = read_weight(p, &format!("Weight for set {} (kg): ", i))? else {
            return Ok(None);
        };
        sets.push((reps, weight));
    }
    Ok(Some(sets))
}

// Body weight and history

fn log_body_weight<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    config: &TrackerConfig,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let Some(date) = ask_date(p, "Date (YYYY-MM-DD, blank for today, 0 to go back): ", today)?
    else {
        return back(p);
    };
    let Some(weight) = p.read_f64("Body weight (kg): ")? else {
        return back(p);
    };
    let measurement = BodyWeightLog::open(&config.body_weight_table).record(date.date, weight)?;
    p.say(format!(
        "Recorded body weight {:.1} kg on {}.",
        measurement.weight, date
    ))?;
    Ok(())
}

fn show_history<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    config: &TrackerConfig,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let Some(date) = ask_date(p, "Date to show (YYYY-MM-DD, blank for today): ", today)? else {
        return back(p);
    };
    let ledger = WorkoutLedger::open(&config.workouts_table);
    p.say(render_day(&ledger, date.date).trim_end())?;
    Ok(())
}

// Statistics

fn stats_menu<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    config: &TrackerConfig,
) -> anyhow::Result<()> {
    let ledger = WorkoutLedger::open(&config.workouts_table);
    loop {
        let entries = ledger.all();
        if entries.is_empty() {
            p.say("No workouts recorded yet.")?;
            return Ok(());
        }

        p.say("\nWhat would you like to see?")?;
        p.say("1. Routine distribution")?;
        p.say("2. Exercise progression")?;
        p.say("0. Back")?;
        let Some(choice) = p.read_int("Option (0-2): ")? else {
            return Ok(());
        };
        match choice {
            0 => return back(p),
            1 => p.say(distribution_chart(&routine_distribution(&entries)).trim_end())?,
            2 => {
                let registry = open_goals(config)?;
                analyze_exercise(p, &ledger, &entries, &registry)?;
            }
            _ => {
                p.say("Invalid option, try again.")?;
                continue;
            }
        }

        if !p.confirm("Do something else? (s/n): ")? {
            return Ok(());
        }
    }
}

fn analyze_exercise<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    ledger: &WorkoutLedger,
    entries: &[WorkoutEntry],
    registry: &GoalRegistry,
) -> anyhow::Result<()> {
    let routines: Vec<String> = ledger
        .routines()
        .into_iter()
        .filter(|r| r != REST_DAY && r != SICK_DAY)
        .collect();
    if routines.is_empty() {
        p.say("No exercises recorded yet.")?;
        return Ok(());
    }

    loop {
        p.say("Routines:")?;
        let Some(routine) = pick(p, &routines, "Routine number to analyze (0 to go back): ")?
        else {
            return Ok(());
        };

        let exercises = ledger.exercises_in(routine);
        p.say("\nExercises in the routine:")?;
        let Some(exercise) = pick(p, &exercises, "Exercise number to analyze (0 to go back): ")?
        else {
            continue;
        };

        let goal = registry.get(exercise);
        for metric in [Metric::Reps, Metric::Weight] {
            p.say("")?;
            p.say(render_progression(entries, exercise, metric, goal).trim_end())?;
        }
        return Ok(());
    }
}

/// Numbered pick from a list; `None` for `0` or end of input.
fn pick<'a, R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    items: &'a [String],
    prompt: &str,
) -> anyhow::Result<Option<&'a String>> {
    for (i, item) in items.iter().enumerate() {
        p.say(format!("{}. {}", i + 1, item))?;
    }
    loop {
        let Some(choice) = p.read_int(prompt)? else {
            return Ok(None);
        };
        match usize::try_from(choice) {
            Ok(0) => return Ok(None),
            Ok(n) if n <= items.len() => return Ok(Some(&items[n - 1])),
            _ => p.say("Invalid selection, try again.")?,
        }
    }
}

// Goals

fn goals_menu<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    config: &TrackerConfig,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let mut registry = open_goals(config)?;
    loop {
        p.say("\n1. Set a goal")?;
        p.say("2. List goals")?;
        p.say("3. Delete a goal")?;
        p.say("4. Back to main menu")?;

        let Some(choice) = p.read_int("Choose an option: ")? else {
            return Ok(());
        };
        let result = match choice {
            1 => set_goal(p, &mut registry, config, today),
            2 => list_goals(p, &registry, config),
            3 => delete_goal(p, &mut registry),
            4 => return back(p),
            _ => {
                p.say("Invalid option, try again.")?;
                continue;
            }
        };
        recover(p, result)?;
    }
}

fn set_goal<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    registry: &mut GoalRegistry,
    config: &TrackerConfig,
    today: NaiveDate,
) -> anyhow::Result<()> {
    let exercises = config.exercises.all_exercises();
    if exercises.is_empty() {
        p.say("No exercises configured to set goals for.")?;
        return Ok(());
    }

    p.say("\nExercises:")?;
    for (i, exercise) in exercises.iter().enumerate() {
        p.say(format!("{}. {}", i + 1, exercise))?;
    }
    let Some(choice) = p.read_int("Exercise number for the goal (0 to go back): ")? else {
        return back(p);
    };
    let exercise = match usize::try_from(choice) {
        Ok(0) => return back(p),
        Ok(n) if n <= exercises.len() => exercises[n - 1],
        _ => {
            p.say("Invalid selection.")?;
            return Ok(());
        }
    };

    if let Some(existing) = registry.get(exercise) {
        p.say(format!(
            "{} already has a goal: {:.1} kg x {} reps by {}.",
            exercise, existing.target_weight, existing.target_reps, existing.deadline
        ))?;
        if !p.confirm("Update it? (s/n): ")? {
            return Ok(());
        }
    }

    let Some(weight) = read_target::<f64, _, _>(
        p,
        &format!("Target weight (kg) for {} (blank to go back): ", exercise),
    )?
    else {
        return back(p);
    };
    let Some(reps) = read_target::<i64, _, _>(
        p,
        &format!("Target reps for {} (blank to go back): ", exercise),
    )?
    else {
        return back(p);
    };
    let Some(deadline) = ask_date(p, "Deadline (YYYY-MM-DD): ", today)? else {
        return back(p);
    };

    let outcome = registry.set(NewGoal::new(exercise, weight, reps, deadline))?;
    p.say(describe_set(&outcome).trim_end())?;
    list_goals(p, registry, config)
}

fn list_goals<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    registry: &GoalRegistry,
    config: &TrackerConfig,
) -> anyhow::Result<()> {
    p.say(render_goals(registry.get_all()).trim_end())?;
    if registry.is_empty() {
        return Ok(());
    }
    if p.confirm("\nCompare with your recorded workouts? (s/n): ")? {
        let entries = WorkoutLedger::open(&config.workouts_table).all();
        p.say(render_progress(&compare_all(registry.get_all(), &entries)).trim_end())?;
    }
    Ok(())
}

fn delete_goal<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    registry: &mut GoalRegistry,
) -> anyhow::Result<()> {
    if registry.is_empty() {
        p.say("No goals set.")?;
        return Ok(());
    }

    p.say(render_goals(registry.get_all()).trim_end())?;
    let Some(choice) = p.read_int("Number of the goal to delete (0 to go back): ")? else {
        return back(p);
    };
    if choice == 0 {
        return back(p);
    }
    let position = usize::try_from(choice).map_err(|_| GoalError::InvalidSelection {
        position: 0,
        len: registry.len(),
    })?;

    let removed = registry.delete(position)?;
    p.say(format!(
        "Deleted goal for {}. Positions renumbered.",
        removed.exercise
    ))?;
    p.say(render_goals(registry.get_all()).trim_end())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::{output_of, scripted};
    use gym_store::DateInput;
    use tempfile::TempDir;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        day(2024, 5, 15)
    }

    fn session(lines: &[&str]) -> (TempDir, TrackerConfig, String) {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let mut p = scripted(lines);
        run(&mut p, &config, today()).unwrap();
        let output = output_of(&p);
        (dir, config, output)
    }

    // Default pool: 1 Pecho-Tríceps, 2 Espalda-Bíceps, 3 Pierna, 4 Otra,
    // 5 Descanso, 6 Enfermo. Sentadilla is exercise 1 of Pierna and the
    // 15th exercise overall.

    #[test]
    fn logs_uniform_sets_after_confirmation() {
        let (_dir, config, output) = session(&[
            "1", "2024-05-01", "3", "1", "2", "s", "5", "100", "s", "6",
        ]);

        let sets = WorkoutLedger::open(&config.workouts_table).for_exercise("Sentadilla");
        assert_eq!(sets.len(), 2);
        assert!(sets.iter().all(|s| s.reps == 5 && s.weight == 100.0));
        assert_eq!(sets[0].date, day(2024, 5, 1));
        assert_eq!(sets[0].routine, "Pierna");
        assert!(output.contains("Workout for Pierna on 2024-05-01:"));
        assert!(output.contains("Saved 2 set(s)."));
    }

    #[test]
    fn logs_per_set_values_for_several_exercises() {
        let (_dir, config, _) = session(&[
            "1", "2024-05-01", "3", "1, 4", "2", "n", "5", "90", "4", "95", "1", "s", "12",
            "30", "s", "6",
        ]);

        let ledger = WorkoutLedger::open(&config.workouts_table);
        let squat = ledger.for_exercise("Sentadilla");
        assert_eq!(squat.len(), 2);
        assert_eq!((squat[1].reps, squat[1].weight), (4, 95.0));
        assert_eq!(ledger.for_exercise("Curl Femoral").len(), 1);
    }

    #[test]
    fn going_back_mid_entry_saves_nothing() {
        let (_dir, config, output) =
            session(&["1", "2024-05-01", "3", "1", "2", "0", "6"]);

        assert!(WorkoutLedger::open(&config.workouts_table).all().is_empty());
        assert!(!config.workouts_table.exists());
        assert!(output.contains("Going back..."));
    }

    #[test]
    fn declining_confirmation_discards_workout() {
        let (_dir, config, output) = session(&[
            "1", "", "3", "1", "1", "s", "5", "100", "n", "6",
        ]);
        assert!(WorkoutLedger::open(&config.workouts_table).all().is_empty());
        assert!(output.contains("Workout discarded."));
    }

    #[test]
    fn invalid_exercise_numbers_are_skipped() {
        let (_dir, config, output) = session(&[
            "1", "2024-05-01", "3", "9,x", "2", "1", "s", "10", "40", "s", "6",
        ]);
        assert!(output.contains("Skipping invalid selection '9'."));
        assert!(output.contains("Skipping invalid selection 'x'."));
        assert_eq!(
            WorkoutLedger::open(&config.workouts_table)
                .for_exercise("Leg Extension Unilateral")
                .len(),
            1
        );
    }

    #[test]
    fn rest_day_uses_today_for_blank_date() {
        let (_dir, config, _) = session(&["1", "", "5", "s", "6"]);
        let all = WorkoutLedger::open(&config.workouts_table).all();
        assert_eq!(all, vec![WorkoutEntry::RestDay { date: today() }]);
    }

    #[test]
    fn custom_routine_asks_for_exercise_name() {
        let (_dir, config, _) = session(&[
            "1", "2024-05-01", "4", "Hip Thrust", "1", "s", "10", "60", "s", "6",
        ]);
        let sets = WorkoutLedger::open(&config.workouts_table).for_exercise("Hip Thrust");
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].routine, "Otra");
    }

    #[test]
    fn invalid_date_is_reported_and_replaced() {
        let (_dir, config, output) = session(&["1", "ayer", "6", "s", "6"]);
        assert!(output.contains("Invalid date 'ayer'"));
        assert_eq!(
            WorkoutLedger::open(&config.workouts_table).all(),
            vec![WorkoutEntry::SickDay { date: today() }]
        );
    }

    #[test]
    fn body_weight_is_recorded() {
        let (_dir, config, output) = session(&["2", "2024-05-01", "80,5", "6"]);
        let all = BodyWeightLog::open(&config.body_weight_table).all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].weight, 80.5);
        assert!(output.contains("Recorded body weight 80.5 kg on 2024-05-01."));
    }

    #[test]
    fn negative_body_weight_is_reported_and_session_continues() {
        let (_dir, config, output) = session(&["2", "2024-05-01", "-3", "6"]);
        assert!(output.contains("Error: invalid entry"));
        assert!(output.contains("See you next time"));
        assert!(BodyWeightLog::open(&config.body_weight_table).all().is_empty());
    }

    #[test]
    fn sets_goal_and_tracks_it() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        WorkoutLedger::open(&config.workouts_table)
            .append(&[WorkoutEntry::Set(WorkoutSet::new(
                day(2024, 5, 10),
                "Pierna",
                "Sentadilla",
                5,
                100.0,
            ))])
            .unwrap();

        let mut p = scripted(&["5", "1", "15", "100", "5", "2024-06-01", "s", "4", "6"]);
        run(&mut p, &config, today()).unwrap();
        let output = output_of(&p);

        let registry = GoalRegistry::open(&config.goals_table).unwrap();
        let goal = registry.get("Sentadilla").unwrap();
        assert_eq!(goal.target_reps, 5);
        assert_eq!(goal.deadline, day(2024, 6, 1));
        assert!(output.contains("Set goal for Sentadilla"));
        assert!(output.contains("status: achieved"));
    }

    #[test]
    fn invalid_goal_is_reported_and_not_stored() {
        let (_dir, config, output) = session(&[
            "5", "1", "15", "100", "-5", "2024-06-01", "4", "6",
        ]);
        assert!(output.contains("Error: invalid goal"));
        assert!(GoalRegistry::open(&config.goals_table).unwrap().is_empty());
    }

    #[test]
    fn existing_goal_is_kept_when_update_declined() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let mut registry = GoalRegistry::open(&config.goals_table).unwrap();
        registry
            .set(NewGoal::new("Sentadilla", 100.0, 5, DateInput::supplied(day(2024, 6, 1))))
            .unwrap();

        let mut p = scripted(&["5", "1", "15", "n", "4", "6"]);
        run(&mut p, &config, today()).unwrap();

        let reopened = GoalRegistry::open(&config.goals_table).unwrap();
        assert_eq!(reopened.get("Sentadilla").unwrap().target_weight, 100.0);
        assert!(output_of(&p).contains("already has a goal"));
    }

    #[test]
    fn deletes_goal_by_position() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        let mut registry = GoalRegistry::open(&config.goals_table).unwrap();
        for name in ["Remo", "Sentadilla"] {
            registry
                .set(NewGoal::new(name, 50.0, 8, DateInput::supplied(day(2024, 6, 1))))
                .unwrap();
        }

        let mut p = scripted(&["5", "3", "1", "3", "7", "4", "6"]);
        run(&mut p, &config, today()).unwrap();
        let output = output_of(&p);

        let reopened = GoalRegistry::open(&config.goals_table).unwrap();
        assert_eq!(reopened.len(), 1);
        assert_eq!(reopened.get_all()[0].exercise, "Sentadilla");
        assert!(output.contains("Deleted goal for Remo."));
        assert!(output.contains("Error: invalid selection: 7 (expected 1 to 1)"));
    }

    #[test]
    fn oversized_set_count_is_asked_again() {
        let mut p = scripted(&["4000000000", "101", "2", "s", "5", "100"]);
        let sets = read_sets(&mut p, "Sentadilla").unwrap().unwrap();

        assert_eq!(sets, vec![(5, 100.0), (5, 100.0)]);
        assert_eq!(output_of(&p).matches("At most 100 sets per exercise.").count(), 2);
    }

    #[test]
    fn out_of_range_set_count_is_asked_again() {
        let mut p = scripted(&["-1", "99999999999", "1", "n", "8", "60"]);
        let sets = read_sets(&mut p, "Remo").unwrap().unwrap();

        assert_eq!(sets, vec![(8, 60.0)]);
        assert_eq!(output_of(&p).matches("Please enter a number of 0 or more.").count(), 2);
    }

    #[test]
    fn blank_goal_target_goes_back() {
        let (_dir, config, output) = session(&["5", "1", "15", "", "4", "6"]);

        assert!(GoalRegistry::open(&config.goals_table).unwrap().is_empty());
        assert_eq!(output.matches("Going back...").count(), 2);
        assert!(output.contains("(blank to go back)"));
    }

    #[test]
    fn zero_goal_target_is_accepted() {
        let (_dir, config, _) = session(&["5", "1", "15", "0", "5", "2024-06-01", "n", "4", "6"]);

        let registry = GoalRegistry::open(&config.goals_table).unwrap();
        assert_eq!(registry.get("Sentadilla").unwrap().target_weight, 0.0);
    }

    #[test]
    fn stats_show_distribution() {
        let dir = TempDir::new().unwrap();
        let config = TrackerConfig::for_dir(dir.path());
        WorkoutLedger::open(&config.workouts_table)
            .append(&[
                WorkoutEntry::Set(WorkoutSet::new(day(2024, 5, 1), "Pierna", "Sentadilla", 5, 90.0)),
                WorkoutEntry::RestDay { date: day(2024, 5, 2) },
            ])
            .unwrap();

        let mut p = scripted(&["3", "1", "s", "2", "1", "1", "n", "6"]);
        run(&mut p, &config, today()).unwrap();
        let output = output_of(&p);

        assert!(output.contains("Sessions per routine"));
        assert!(output.contains("Sentadilla: Repeticiones"));
        assert!(output.contains("Sentadilla: Peso (kg)"));
    }

    #[test]
    fn end_of_input_ends_session_cleanly() {
        let (_dir, config, output) = session(&["1", "2024-05-01", "3"]);
        assert!(WorkoutLedger::open(&config.workouts_table).all().is_empty());
        assert!(output.contains("See you next time"));
    }

    #[test]
    fn unknown_main_option_is_rejected() {
        let (_dir, _config, output) = session(&["9", "abc", "6"]);
        assert!(output.contains("Invalid option, try again."));
        assert!(output.contains("Please enter a whole number."));
    }
}
