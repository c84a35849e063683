//! # gym-cli
//!
//! Command-line interface for the gym tracker.
//!
//! - `gym workout log/rest/sick`: record sets, rest days and sick days
//! - `gym weight log/list`: body-weight measurements
//! - `gym history`: everything recorded on one day
//! - `gym stats distribution/progression`: text charts over the ledger
//! - `gym goal set/list/delete/track`: per-exercise goals and progress
//! - `gym exercises`: the configured exercise pool
//! - `gym menu`: interactive session

mod chart;
mod commands;
mod prompt;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gym_config::TrackerConfig;
use tracing_subscriber::EnvFilter;

/// Gym tracker: log training, set goals, review progress.
#[derive(Parser)]
#[command(name = "gym", version, about)]
struct Cli {
    /// Directory holding the tables and optional gym.toml (defaults to current directory).
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Log library diagnostics at debug level.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record workout sets, rest days and sick days.
    Workout {
        #[command(subcommand)]
        command: commands::workout::WorkoutCommands,
    },
    /// Record or list body-weight measurements.
    Weight {
        #[command(subcommand)]
        command: commands::weight::WeightCommands,
    },
    /// Show every entry recorded on one day.
    History {
        /// Day to show (YYYY-MM-DD, defaults to today).
        #[arg(long, default_value = "")]
        date: String,
    },
    /// Charts over the workout ledger.
    Stats {
        #[command(subcommand)]
        command: commands::stats::StatsCommands,
    },
    /// Manage per-exercise goals.
    Goal {
        #[command(subcommand)]
        command: commands::goal::GoalCommands,
    },
    /// List the configured routines and exercises.
    Exercises,
    /// Start an interactive session.
    Menu,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = TrackerConfig::load_or_default(&cli.data_dir);
    tracing::debug!(data_dir = %config.data_dir.display(), "using data directory");

    match &cli.command {
        Commands::Workout { command } => commands::workout::execute(command, &config),
        Commands::Weight { command } => commands::weight::execute(command, &config),
        Commands::History { date } => commands::history::execute(&config, date),
        Commands::Stats { command } => commands::stats::execute(command, &config),
        Commands::Goal { command } => commands::goal::execute(command, &config),
        Commands::Exercises => commands::list_exercises(&config),
        Commands::Menu => commands::menu::execute(&config),
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    // Logs go to stderr so they don't mix with command output on stdout.
    // RUST_LOG, when set, replaces the per-crate defaults entirely.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = if verbose { "debug" } else { "warn" };
            let mut filter = EnvFilter::new("warn");
            for target in ["gym", "gym_store", "gym_config", "gym_ledger", "gym_goal"] {
                filter = filter.add_directive(format!("{}={}", target, level).parse()?);
            }
            filter
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
    Ok(())
}
