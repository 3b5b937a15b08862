//! Budget error types.

use thiserror::Error;

use crate::ledger::Category;

/// Budget-related errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// Limits can only be set for expense categories.
    #[error("Category {0} cannot carry a budget limit")]
    NotBudgetable(Category),

    /// Limit amount cannot be negative.
    #[error("Limit cannot be negative")]
    NegativeLimit,
}
