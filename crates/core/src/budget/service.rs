//! Budget overview aggregation and limit copying.

use std::collections::HashMap;

use rust_decimal::Decimal;

use finplan_shared::types::{BudgetLimitId, YearMonth};

use crate::ledger::{Category, LedgerSummary};

use super::error::BudgetError;
use super::types::{BudgetLimit, BudgetOverview, CategoryRow, CopiedLimits, MonthTotals};

/// Budget service for business logic.
pub struct BudgetService;

impl BudgetService {
    /// Builds the monthly budget overview from the month's configured limits
    /// and its ledger summary.
    ///
    /// The result always contains one row per expense category in the fixed
    /// enumeration order, with limit and spent defaulting to zero, so the
    /// consumer can render a complete table. `pct` is zero whenever the
    /// limit is zero; `remaining` is left negative when spending exceeds the
    /// limit - that is the over-budget signal.
    #[must_use]
    pub fn overview(
        month: YearMonth,
        limits: &[BudgetLimit],
        ledger: &LedgerSummary,
    ) -> BudgetOverview {
        // Last write wins when the input carries duplicate categories.
        let limit_by_category: HashMap<Category, Decimal> = limits
            .iter()
            .map(|l| (l.category, l.limit))
            .collect();

        let by_category: Vec<CategoryRow> = Category::EXPENSES
            .iter()
            .map(|&category| {
                let limit = limit_by_category
                    .get(&category)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let spent = ledger
                    .by_category
                    .get(&category)
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let remaining = limit - spent;
                let pct = if limit.is_zero() {
                    Decimal::ZERO
                } else {
                    spent / limit
                };

                CategoryRow {
                    category,
                    limit,
                    spent,
                    remaining,
                    pct,
                    over_budget: remaining < Decimal::ZERO,
                }
            })
            .collect();

        let budgeted: Decimal = by_category.iter().map(|row| row.limit).sum();

        BudgetOverview {
            month,
            totals: MonthTotals {
                income: ledger.income,
                expense: ledger.expense,
                savings: ledger.savings,
                budgeted,
            },
            by_category,
        }
    }

    /// Merges every limit of a source month into a target month's limit set.
    ///
    /// An existing target limit for the same category is overwritten
    /// (last-write-wins upsert keyed by category), never duplicated. The
    /// reported count is the number of source limits applied; running the
    /// copy again produces the same target set.
    #[must_use]
    pub fn copy_limits(
        source: &[BudgetLimit],
        existing_target: &[BudgetLimit],
        to_month: YearMonth,
    ) -> CopiedLimits {
        let mut limits = existing_target.to_vec();

        for src in source {
            match limits.iter_mut().find(|l| l.category == src.category) {
                Some(existing) => existing.limit = src.limit,
                None => limits.push(BudgetLimit {
                    id: BudgetLimitId::new(),
                    category: src.category,
                    month: to_month,
                    limit: src.limit,
                }),
            }
        }

        CopiedLimits {
            copied: source.len(),
            limits,
        }
    }

    /// Validates a limit before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::NotBudgetable` for the `Income` category and
    /// `BudgetError::NegativeLimit` for negative amounts.
    pub fn validate_limit(category: Category, limit: Decimal) -> Result<(), BudgetError> {
        if !category.is_expense() {
            return Err(BudgetError::NotBudgetable(category));
        }

        if limit < Decimal::ZERO {
            return Err(BudgetError::NegativeLimit);
        }

        Ok(())
    }
}
