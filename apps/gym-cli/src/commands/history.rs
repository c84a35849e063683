// history.rs - History subcommand: everything recorded on one day.

use chrono::NaiveDate;
use gym_config::TrackerConfig;
use gym_ledger::WorkoutLedger;
use gym_store::{parse_date_input, today};

use super::{date_notice, describe_entry};

pub fn execute(config: &TrackerConfig, date: &str) -> anyhow::Result<()> {
    let date = parse_date_input(date, today());
    if let Some(notice) = date_notice(&date) {
        println!("{}", notice);
    }
    let ledger = WorkoutLedger::open(&config.workouts_table);
    print!("{}", render_day(&ledger, date.date));
    Ok(())
}

/// History table for one day.
pub fn render_day(ledger: &WorkoutLedger, date: NaiveDate) -> String {
    let entries = ledger.on_date(date);
    if entries.is_empty() {
        return format!("No workouts recorded on {}.\n", date);
    }

    let mut out = format!("Workout history for {}:\n", date);
    out.push_str(&format!(
        "{:<12} {:<18} {:<26} {:>5} {:>9}\n",
        "DATE", "ROUTINE", "EXERCISE", "REPS", "KG"
    ));
    out.push_str(&"-".repeat(74));
    out.push('\n');
    for entry in &entries {
        out.push_str(&describe_entry(entry));
        out.push('\n');
    }
    out
}
