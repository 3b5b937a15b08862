//! Goal and contribution store.

use std::sync::RwLock;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use finplan_core::goal::{Contribution, Goal, GoalService, GoalStatus};
use finplan_core::ledger::Transaction;
use finplan_shared::types::{ContributionId, GoalId};

use crate::error::StoreError;
use crate::{read_lock, write_lock};

/// Input for creating a goal.
#[derive(Debug, Clone)]
pub struct NewGoal {
    /// Display name.
    pub name: String,
    /// Target amount, positive (validated at the boundary).
    pub target_amount: Decimal,
    /// Date the target should be reached by.
    pub target_date: NaiveDate,
}

/// In-memory goal store; goals keep creation order, contributions keep
/// insertion order.
#[derive(Debug, Default)]
pub struct GoalStore {
    goals: RwLock<Vec<Goal>>,
    contributions: RwLock<Vec<Contribution>>,
}

impl GoalStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a goal; new goals start `Active` with nothing contributed.
    pub fn create(&self, input: NewGoal) -> Goal {
        let goal = Goal {
            id: GoalId::new(),
            name: input.name,
            target_amount: input.target_amount,
            target_date: input.target_date,
            status: GoalStatus::Active,
            contributed: Decimal::ZERO,
            created_at: Utc::now(),
        };
        write_lock(&self.goals).push(goal.clone());
        goal
    }

    /// Snapshot of all goals, in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<Goal> {
        read_lock(&self.goals).clone()
    }

    /// Looks up one goal.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::GoalNotFound` when no goal has the given ID.
    pub fn get(&self, id: GoalId) -> Result<Goal, StoreError> {
        read_lock(&self.goals)
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or(StoreError::GoalNotFound(id))
    }

    /// Sets a goal's lifecycle status.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::GoalNotFound` when no goal has the given ID.
    pub fn set_status(&self, id: GoalId, status: GoalStatus) -> Result<Goal, StoreError> {
        let mut goals = write_lock(&self.goals);
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StoreError::GoalNotFound(id))?;

        goal.status = status;
        Ok(goal.clone())
    }

    /// Records a contribution against a goal.
    ///
    /// Applies the lifecycle rule (an active goal reaching its target
    /// completes) and, when `affects_budget` is set, returns the
    /// materialized `Investment` transaction for the caller to record in
    /// the transaction store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::GoalNotFound` when no goal has the given ID.
    pub fn contribute(
        &self,
        id: GoalId,
        amount: Decimal,
        date: NaiveDate,
        note: Option<String>,
        affects_budget: bool,
    ) -> Result<(Contribution, Option<Transaction>), StoreError> {
        let mut goals = write_lock(&self.goals);
        let goal = goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StoreError::GoalNotFound(id))?;

        GoalService::apply_contribution(goal, amount);

        let materialized = affects_budget
            .then(|| GoalService::materialize_contribution(goal, amount, date, note.as_deref()));

        let contribution = Contribution {
            id: ContributionId::new(),
            goal_id: id,
            amount,
            date,
            note,
            affects_budget,
        };
        write_lock(&self.contributions).push(contribution.clone());

        Ok((contribution, materialized))
    }

    /// Snapshot of one goal's contributions, in insertion order.
    #[must_use]
    pub fn contributions(&self, id: GoalId) -> Vec<Contribution> {
        read_lock(&self.contributions)
            .iter()
            .filter(|c| c.goal_id == id)
            .cloned()
            .collect()
    }

    /// Deletes a goal and its contributions.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::GoalNotFound` when no goal has the given ID.
    pub fn delete(&self, id: GoalId) -> Result<(), StoreError> {
        let mut goals = write_lock(&self.goals);
        let before = goals.len();
        goals.retain(|g| g.id != id);

        if goals.len() == before {
            return Err(StoreError::GoalNotFound(id));
        }

        write_lock(&self.contributions).retain(|c| c.goal_id != id);
        Ok(())
    }
}
