// ledger.rs - WorkoutLedger: the append-only workout table.
//
// Every read goes back to disk, so a ledger value never holds stale rows.
// Rows that fail to decode or validate are skipped with a warning and never
// counted as zero-valued sets.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;

use gym_store::{SaveMode, Table};

use crate::entry::{WorkoutEntry, WorkoutRow, WorkoutSet};
use crate::error::LedgerError;

/// Append-only collection of workout entries.
pub struct WorkoutLedger {
    table: Table<WorkoutRow>,
}

impl WorkoutLedger {
    /// Bind the ledger to a table file. The file is created on first append.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            table: Table::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.table.path()
    }

    /// Append entries in order. All entries are validated before anything
    /// is written, so a rejected batch leaves the table untouched.
    pub fn append(&self, entries: &[WorkoutEntry]) -> Result<(), LedgerError> {
        for entry in entries {
            entry.validate()?;
        }
        let rows: Vec<WorkoutRow> = entries.iter().map(WorkoutRow::from).collect();
        self.table.save(&rows, SaveMode::Append)?;
        tracing::info!(
            ledger = %self.table.path().display(),
            entries = rows.len(),
            "appended workout entries"
        );
        Ok(())
    }

    /// Every entry, in insertion order.
    pub fn all(&self) -> Vec<WorkoutEntry> {
        self.table
            .load()
            .into_iter()
            .filter_map(|row| {
                let date = row.date;
                match WorkoutEntry::try_from(row) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        tracing::warn!(%date, "skipping workout row: {}", e);
                        None
                    }
                }
            })
            .collect()
    }

    /// Performed sets only, in insertion order.
    pub fn sets(&self) -> Vec<WorkoutSet> {
        self.all()
            .into_iter()
            .filter_map(|entry| match entry {
                WorkoutEntry::Set(set) => Some(set),
                _ => None,
            })
            .collect()
    }

    /// Sets whose exercise matches `name` exactly (case-sensitive).
    pub fn for_exercise(&self, name: &str) -> Vec<WorkoutSet> {
        self.sets()
            .into_iter()
            .filter(|set| set.exercise == name)
            .collect()
    }

    /// Every entry recorded on a calendar day.
    pub fn on_date(&self, date: NaiveDate) -> Vec<WorkoutEntry> {
        self.all()
            .into_iter()
            .filter(|entry| entry.date() == date)
            .collect()
    }

    /// Distinct routine labels in first-seen order, rest and sick days included.
    pub fn routines(&self) -> Vec<String> {
        distinct(self.all().iter().map(|entry| entry.routine()))
    }

    /// Distinct exercises performed under a routine, in first-seen order.
    pub fn exercises_in(&self, routine: &str) -> Vec<String> {
        let sets = self.sets();
        distinct(
            sets.iter()
                .filter(|set| set.routine == routine)
                .map(|set| set.exercise.as_str()),
        )
    }
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .filter(|label| seen.insert(*label))
        .map(str::to_string)
        .collect()
}
