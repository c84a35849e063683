// weight.rs - Body-weight subcommands: log, list.

use clap::Subcommand;
use gym_config::TrackerConfig;
use gym_ledger::BodyWeightLog;
use gym_store::{parse_date_input, today};

use super::date_notice;

#[derive(Subcommand)]
pub enum WeightCommands {
    /// Record a body-weight measurement.
    Log {
        /// Body weight in kg.
        kg: f64,
        /// Day of the measurement (YYYY-MM-DD, defaults to today).
        #[arg(long, default_value = "")]
        date: String,
    },
    /// List every measurement.
    List,
}

pub fn execute(cmd: &WeightCommands, config: &TrackerConfig) -> anyhow::Result<()> {
    let log = BodyWeightLog::open(&config.body_weight_table);

    match cmd {
        WeightCommands::Log { kg, date } => {
            let date = parse_date_input(date, today());
            if let Some(notice) = date_notice(&date) {
                println!("{}", notice);
            }
            let measurement = log.record(date.date, *kg)?;
            println!(
                "Recorded body weight {:.1} kg on {}.",
                measurement.weight, date
            );
        }
        WeightCommands::List => {
            let all = log.all();
            if all.is_empty() {
                println!("No body-weight measurements recorded.");
                return Ok(());
            }
            println!("{:<12} {:>9}", "DATE", "KG");
            println!("{}", "-".repeat(22));
            for m in &all {
                println!("{:<12} {:>9.1}", m.date.to_string(), m.weight);
            }
            println!("\n{} measurement(s) total.", all.len());
        }
    }

    Ok(())
}
