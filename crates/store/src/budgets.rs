//! Budget limit store.

use std::sync::RwLock;

use rust_decimal::Decimal;

use finplan_core::budget::{BudgetLimit, BudgetService};
use finplan_core::ledger::Category;
use finplan_shared::types::{BudgetLimitId, YearMonth};

use crate::{read_lock, write_lock};

/// In-memory budget limit store, unique per (category, month).
#[derive(Debug, Default)]
pub struct BudgetStore {
    inner: RwLock<Vec<BudgetLimit>>,
}

impl BudgetStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the limits configured for one month.
    #[must_use]
    pub fn month_limits(&self, month: YearMonth) -> Vec<BudgetLimit> {
        read_lock(&self.inner)
            .iter()
            .filter(|l| l.month == month)
            .cloned()
            .collect()
    }

    /// Replaces the month's limit set with the given items.
    ///
    /// Full-replace semantics: a category absent from `items` has no limit
    /// for the month afterwards (reads back as zero in the overview). The
    /// last entry wins when `items` repeats a category.
    pub fn replace_month(
        &self,
        month: YearMonth,
        items: &[(Category, Decimal)],
    ) -> Vec<BudgetLimit> {
        let mut limits = write_lock(&self.inner);
        limits.retain(|l| l.month != month);

        let mut replaced: Vec<BudgetLimit> = Vec::with_capacity(items.len());
        for &(category, limit) in items {
            match replaced.iter_mut().find(|l| l.category == category) {
                Some(existing) => existing.limit = limit,
                None => replaced.push(BudgetLimit {
                    id: BudgetLimitId::new(),
                    category,
                    month,
                    limit,
                }),
            }
        }

        limits.extend(replaced.iter().cloned());
        replaced
    }

    /// Copies every limit of `from` into `to`, overwriting per category.
    ///
    /// Returns the number of source limits applied.
    pub fn copy_month(&self, from: YearMonth, to: YearMonth) -> usize {
        let mut limits = write_lock(&self.inner);

        let source: Vec<BudgetLimit> = limits.iter().filter(|l| l.month == from).cloned().collect();
        let existing_target: Vec<BudgetLimit> =
            limits.iter().filter(|l| l.month == to).cloned().collect();

        let outcome = BudgetService::copy_limits(&source, &existing_target, to);

        limits.retain(|l| l.month != to);
        limits.extend(outcome.limits);

        outcome.copied
    }
}
