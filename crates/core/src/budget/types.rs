//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finplan_shared::types::{BudgetLimitId, YearMonth};

use crate::ledger::Category;

/// A configured monthly spending ceiling for one expense category.
///
/// Unique per (category, month); the stores enforce the upsert key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLimit {
    /// Limit ID.
    pub id: BudgetLimitId,
    /// Expense category the limit applies to (never `Income`).
    pub category: Category,
    /// Month the limit applies to.
    pub month: YearMonth,
    /// Ceiling amount, non-negative.
    pub limit: Decimal,
}

/// One row of the monthly budget overview, derived per expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRow {
    /// Expense category.
    pub category: Category,
    /// Configured limit, zero when none is set.
    pub limit: Decimal,
    /// Amount spent in the month.
    pub spent: Decimal,
    /// `limit - spent`; negative means over budget, deliberately unclamped.
    pub remaining: Decimal,
    /// `spent / limit` as a ratio (1.2 = 120%); zero when the limit is zero.
    pub pct: Decimal,
    /// True when spending exceeded the limit.
    pub over_budget: bool,
}

/// Month-level totals of the budget overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthTotals {
    /// Income for the month.
    pub income: Decimal,
    /// Expense for the month.
    pub expense: Decimal,
    /// `income - expense`; may be negative.
    pub savings: Decimal,
    /// Sum of the configured limits across all overview rows.
    pub budgeted: Decimal,
}

/// The monthly budget overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetOverview {
    /// The month this overview covers.
    pub month: YearMonth,
    /// Month-level totals.
    pub totals: MonthTotals,
    /// One row per expense category, in the fixed enumeration order.
    pub by_category: Vec<CategoryRow>,
}

/// Result of merging one month's limits into another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedLimits {
    /// The target month's limit set after the merge.
    pub limits: Vec<BudgetLimit>,
    /// Number of source limits applied.
    pub copied: usize,
}
