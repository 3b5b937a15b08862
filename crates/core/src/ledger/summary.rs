//! Pure aggregation over transaction sets.

use chrono::NaiveDate;

use super::types::{LedgerSummary, Transaction};

/// Aggregates `transactions` into income/expense/savings totals and
/// per-category spend.
///
/// When a range bound is given, only transactions with
/// `range_start <= date <= range_end` are included (both ends inclusive,
/// calendar dates only). Every expense category appears in the result even
/// with no matching transactions.
///
/// Single pass, no side effects; calling it twice with the same inputs
/// yields identical output.
#[must_use]
pub fn summarize(
    transactions: &[Transaction],
    range_start: Option<NaiveDate>,
    range_end: Option<NaiveDate>,
) -> LedgerSummary {
    let mut summary = LedgerSummary::empty();

    for tx in transactions {
        if range_start.is_some_and(|start| tx.date < start) {
            continue;
        }
        if range_end.is_some_and(|end| tx.date > end) {
            continue;
        }

        if tx.category.is_expense() {
            summary.expense += tx.amount;
            if let Some(spent) = summary.by_category.get_mut(&tx.category) {
                *spent += tx.amount;
            }
        } else {
            summary.income += tx.amount;
        }
    }

    summary.savings = summary.income - summary.expense;
    summary
}
