//! Goal error types.

use thiserror::Error;

use finplan_shared::types::GoalId;

/// Goal-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GoalError {
    /// Goal not found.
    #[error("Goal not found: {0}")]
    NotFound(GoalId),

    /// Target amount must be positive.
    #[error("Target amount must be positive")]
    NonPositiveTarget,

    /// Goal name must not be empty.
    #[error("Goal name must not be empty")]
    EmptyName,

    /// Contribution amount must be positive.
    #[error("Contribution amount must be positive")]
    NonPositiveAmount,
}
