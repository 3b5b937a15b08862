//! Store error types.

use thiserror::Error;

use finplan_shared::types::{GoalId, TransactionId};

/// Errors returned by the record stores.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Goal not found.
    #[error("Goal not found: {0}")]
    GoalNotFound(GoalId),

    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),
}
