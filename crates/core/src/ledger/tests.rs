//! Tests for ledger aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finplan_shared::types::TransactionId;

use super::summary::summarize;
use super::types::{Category, Transaction};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(category: Category, amount: Decimal, date: NaiveDate) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        category,
        amount,
        date,
        note: None,
    }
}

#[test]
fn test_empty_input_yields_zeroed_summary() {
    let summary = summarize(&[], None, None);

    assert_eq!(summary.income, Decimal::ZERO);
    assert_eq!(summary.expense, Decimal::ZERO);
    assert_eq!(summary.savings, Decimal::ZERO);
    // Every expense category is present with zero spend.
    assert_eq!(summary.by_category.len(), Category::EXPENSES.len());
    assert!(summary.by_category.values().all(Decimal::is_zero));
}

#[test]
fn test_income_and_expense_split() {
    let txs = vec![
        tx(Category::Income, dec!(5000), date(2024, 1, 5)),
        tx(Category::Food, dec!(300), date(2024, 1, 10)),
        tx(Category::Housing, dec!(1200), date(2024, 1, 1)),
    ];

    let summary = summarize(&txs, None, None);

    assert_eq!(summary.income, dec!(5000));
    assert_eq!(summary.expense, dec!(1500));
    assert_eq!(summary.savings, dec!(3500));
    assert_eq!(summary.by_category[&Category::Food], dec!(300));
    assert_eq!(summary.by_category[&Category::Housing], dec!(1200));
    assert_eq!(summary.by_category[&Category::Transport], Decimal::ZERO);
}

#[test]
fn test_savings_may_be_negative() {
    let txs = vec![
        tx(Category::Income, dec!(1000), date(2024, 1, 5)),
        tx(Category::Other, dec!(1600), date(2024, 1, 6)),
    ];

    let summary = summarize(&txs, None, None);

    assert_eq!(summary.savings, dec!(-600));
}

#[test]
fn test_range_bounds_are_inclusive() {
    let txs = vec![
        tx(Category::Food, dec!(10), date(2024, 1, 31)),
        tx(Category::Food, dec!(20), date(2024, 2, 1)),
        tx(Category::Food, dec!(40), date(2024, 2, 29)),
        tx(Category::Food, dec!(80), date(2024, 3, 1)),
    ];

    let summary = summarize(&txs, Some(date(2024, 2, 1)), Some(date(2024, 2, 29)));

    assert_eq!(summary.expense, dec!(60));
    assert_eq!(summary.by_category[&Category::Food], dec!(60));
}

#[test]
fn test_open_ended_ranges() {
    let txs = vec![
        tx(Category::Food, dec!(10), date(2024, 1, 15)),
        tx(Category::Food, dec!(20), date(2024, 2, 15)),
    ];

    let from_feb = summarize(&txs, Some(date(2024, 2, 1)), None);
    assert_eq!(from_feb.expense, dec!(20));

    let until_jan = summarize(&txs, None, Some(date(2024, 1, 31)));
    assert_eq!(until_jan.expense, dec!(10));
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Income),
        Just(Category::Housing),
        Just(Category::Food),
        Just(Category::Transport),
        Just(Category::Utilities),
        Just(Category::Entertainment),
        Just(Category::Health),
        Just(Category::Investment),
        Just(Category::Other),
    ]
}

fn transactions_strategy(max_len: usize) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (category_strategy(), amount_strategy(), 1u32..=28).prop_map(|(category, amount, day)| {
            Transaction {
                id: TransactionId::new(),
                category,
                amount,
                date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
                note: None,
            }
        }),
        0..=max_len,
    )
}

proptest! {
    /// Per-category sums are consistent with the expense total.
    #[test]
    fn prop_by_category_sums_to_expense(txs in transactions_strategy(50)) {
        let summary = summarize(&txs, None, None);

        let by_category_total: Decimal = summary.by_category.values().copied().sum();
        prop_assert_eq!(by_category_total, summary.expense);
    }

    /// Savings is always income minus expense.
    #[test]
    fn prop_savings_is_income_minus_expense(txs in transactions_strategy(50)) {
        let summary = summarize(&txs, None, None);

        prop_assert_eq!(summary.savings, summary.income - summary.expense);
    }

    /// Aggregation is deterministic.
    #[test]
    fn prop_summarize_is_idempotent(txs in transactions_strategy(30)) {
        let first = summarize(&txs, None, None);
        let second = summarize(&txs, None, None);

        prop_assert_eq!(first, second);
    }
}
