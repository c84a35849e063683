// registry.rs - GoalRegistry: one goal per exercise, persisted on every change.
//
// The registry keeps goals in insertion order. Setting a goal for an exercise
// that already has one removes the old goal and appends the new one at the
// end. Deletion is by 1-based position in the current listing; positions are
// renumbered after every delete, so a goal has no identity beyond its place
// in the list. The whole table is rewritten after each mutation, and a
// mutation whose write fails leaves the in-memory registry as it was.

use std::path::Path;

use gym_store::{SaveMode, Table};

use crate::error::GoalError;
use crate::goal::{Goal, NewGoal};

/// Result of a successful [`GoalRegistry::set`].
#[derive(Debug, Clone, PartialEq)]
pub struct GoalSet {
    /// The goal as stored.
    pub goal: Goal,
    /// The goal it replaced, if the exercise already had one.
    pub replaced: Option<Goal>,
    /// True when the deadline input was invalid and today was substituted.
    pub deadline_defaulted: bool,
}

/// The set of per-exercise goals.
pub struct GoalRegistry {
    table: Table<Goal>,
    goals: Vec<Goal>,
}

impl GoalRegistry {
    /// Open the registry backed by a goal table.
    ///
    /// A missing table is created with just its header. Malformed rows are
    /// skipped; if the table lists an exercise more than once, the last row
    /// for it wins.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GoalError> {
        let table: Table<Goal> = Table::new(path);
        match table.ensure_exists() {
            Ok(true) => tracing::info!(table = %table.path().display(), "created goal table"),
            Ok(false) => {}
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => tracing::warn!("could not create goal table: {}", e),
        }

        let goals = normalize(table.load());
        tracing::debug!(goals = goals.len(), "opened goal registry");
        Ok(Self { table, goals })
    }

    pub fn path(&self) -> &Path {
        self.table.path()
    }

    /// Store a goal, replacing any existing goal for the same exercise.
    pub fn set(&mut self, new_goal: NewGoal) -> Result<GoalSet, GoalError> {
        let deadline_defaulted = new_goal.deadline.is_defaulted();
        let goal = new_goal.into_goal()?;

        let mut next = self.goals.clone();
        let replaced = next
            .iter()
            .position(|g| g.exercise == goal.exercise)
            .map(|index| next.remove(index));
        next.push(goal.clone());

        self.commit(next)?;
        tracing::info!(
            exercise = %goal.exercise,
            replaced = replaced.is_some(),
            deadline_defaulted,
            "goal set"
        );

        Ok(GoalSet {
            goal,
            replaced,
            deadline_defaulted,
        })
    }

    /// Every goal, in listing order.
    pub fn get_all(&self) -> &[Goal] {
        &self.goals
    }

    /// The goal for an exercise (exact name match).
    pub fn get(&self, exercise: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.exercise == exercise)
    }

    pub fn exists_for(&self, exercise: &str) -> bool {
        self.get(exercise).is_some()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Remove the goal at a 1-based position in [`get_all`](Self::get_all).
    pub fn delete(&mut self, position: usize) -> Result<Goal, GoalError> {
        let len = self.goals.len();
        if position == 0 || position > len {
            return Err(GoalError::InvalidSelection { position, len });
        }

        let mut next = self.goals.clone();
        let removed = next.remove(position - 1);

        self.commit(next)?;
        tracing::info!(exercise = %removed.exercise, position, "goal deleted");
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<Goal>) -> Result<(), GoalError> {
        self.table.save(&next, SaveMode::Overwrite)?;
        self.goals = next;
        Ok(())
    }
}

/// Drop invalid goals and keep only the last goal per exercise, preserving
/// the relative order of the survivors.
fn normalize(rows: Vec<Goal>) -> Vec<Goal> {
    let mut goals: Vec<Goal> = Vec::with_capacity(rows.len());
    for goal in rows {
        if let Err(e) = goal.validate() {
            tracing::warn!(exercise = %goal.exercise, "skipping stored goal: {}", e);
            continue;
        }
        if let Some(index) = goals.iter().position(|g| g.exercise == goal.exercise) {
            tracing::warn!(
                exercise = %goal.exercise,
                "goal table lists exercise more than once, keeping the last row"
            );
            goals.remove(index);
        }
        goals.push(goal);
    }
    goals
}
