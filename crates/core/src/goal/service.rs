//! Goal lifecycle rules and contribution handling.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use finplan_shared::types::TransactionId;

use crate::ledger::{Category, Transaction};

use super::error::GoalError;
use super::types::{Goal, GoalStatus};

/// Goal service for business logic.
pub struct GoalService;

impl GoalService {
    /// Validates a new goal's fields.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::EmptyName` for a blank name and
    /// `GoalError::NonPositiveTarget` when the target is not positive.
    pub fn validate_new_goal(name: &str, target_amount: Decimal) -> Result<(), GoalError> {
        if name.trim().is_empty() {
            return Err(GoalError::EmptyName);
        }

        if target_amount <= Decimal::ZERO {
            return Err(GoalError::NonPositiveTarget);
        }

        Ok(())
    }

    /// Validates a contribution amount.
    ///
    /// # Errors
    ///
    /// Returns `GoalError::NonPositiveAmount` when the amount is not positive.
    pub fn validate_contribution(amount: Decimal) -> Result<(), GoalError> {
        if amount <= Decimal::ZERO {
            return Err(GoalError::NonPositiveAmount);
        }

        Ok(())
    }

    /// Applies a contribution to the goal's running total.
    ///
    /// An active goal whose contributed total reaches the target flips to
    /// `Completed`. The stored total is allowed to exceed the target;
    /// remaining-amount clamping is a display concern handled by the need
    /// calculation.
    pub fn apply_contribution(goal: &mut Goal, amount: Decimal) {
        goal.contributed += amount;

        if goal.status == GoalStatus::Active && goal.contributed >= goal.target_amount {
            goal.status = GoalStatus::Completed;
        }
    }

    /// Builds the `Investment` transaction that materializes a contribution
    /// in the ledger when `affects_budget` is requested.
    ///
    /// Same amount and date as the contribution; the note carries the goal
    /// name so the transaction stays traceable in statements.
    #[must_use]
    pub fn materialize_contribution(
        goal: &Goal,
        amount: Decimal,
        date: NaiveDate,
        note: Option<&str>,
    ) -> Transaction {
        let note = match note {
            Some(text) if !text.trim().is_empty() => format!("{text} (Goal: {})", goal.name),
            _ => format!("(Goal: {})", goal.name),
        };

        Transaction {
            id: TransactionId::new(),
            category: Category::Investment,
            amount,
            date,
            note: Some(note),
        }
    }
}
