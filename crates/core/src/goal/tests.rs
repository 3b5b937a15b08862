//! Tests for goal need calculation and lifecycle rules.

use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use finplan_shared::types::GoalId;

use crate::ledger::Category;

use super::error::GoalError;
use super::need::GoalNeed;
use super::service::GoalService;
use super::types::{Goal, GoalStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn goal(target: Decimal, contributed: Decimal, target_date: NaiveDate) -> Goal {
    Goal {
        id: GoalId::new(),
        name: "Emergency fund".to_string(),
        target_amount: target,
        target_date,
        status: GoalStatus::Active,
        contributed,
        created_at: Utc::now(),
    }
}

#[test]
fn test_need_ten_months_out() {
    // target 12000, contributed 2000, target 10 months away
    let g = goal(dec!(12000), dec!(2000), date(2024, 10, 20));
    let need = GoalNeed::calculate(&g, date(2024, 1, 15));

    assert_eq!(need.remaining, dec!(10000));
    assert_eq!(need.months_left, 10);
    assert_eq!(need.monthly_needed, dec!(1000));
}

#[test]
fn test_target_in_current_month_counts_as_one() {
    let g = goal(dec!(600), dec!(0), date(2024, 1, 31));
    let need = GoalNeed::calculate(&g, date(2024, 1, 2));

    assert_eq!(need.months_left, 1);
    assert_eq!(need.monthly_needed, dec!(600));
}

#[test]
fn test_past_target_date_is_urgent() {
    let g = goal(dec!(5000), dec!(1000), date(2023, 6, 1));
    let need = GoalNeed::calculate(&g, date(2024, 1, 15));

    assert_eq!(need.months_left, 1);
    assert_eq!(need.remaining, dec!(4000));
    assert_eq!(need.monthly_needed, dec!(4000));
}

#[test]
fn test_over_saved_goal_needs_nothing() {
    let g = goal(dec!(1000), dec!(1250), date(2024, 12, 1));
    let need = GoalNeed::calculate(&g, date(2024, 1, 15));

    // Stored total keeps the overshoot, display figures clamp.
    assert_eq!(need.remaining, Decimal::ZERO);
    assert_eq!(need.monthly_needed, Decimal::ZERO);
    assert_eq!(need.progress_pct, Decimal::ONE);
}

#[test]
fn test_progress_is_unrounded_ratio() {
    let g = goal(dec!(12000), dec!(3000), date(2024, 12, 1));
    let need = GoalNeed::calculate(&g, date(2024, 1, 15));

    assert_eq!(need.progress_pct, dec!(0.25));
}

#[test]
fn test_apply_contribution_accumulates() {
    let mut g = goal(dec!(1000), dec!(100), date(2024, 12, 1));
    GoalService::apply_contribution(&mut g, dec!(250));

    assert_eq!(g.contributed, dec!(350));
    assert_eq!(g.status, GoalStatus::Active);
}

#[test]
fn test_contribution_reaching_target_completes_goal() {
    let mut g = goal(dec!(1000), dec!(900), date(2024, 12, 1));
    GoalService::apply_contribution(&mut g, dec!(100));

    assert_eq!(g.status, GoalStatus::Completed);
    assert_eq!(g.contributed, dec!(1000));
}

#[test]
fn test_contribution_does_not_reactivate_paused_goal() {
    let mut g = goal(dec!(1000), dec!(900), date(2024, 12, 1));
    g.status = GoalStatus::Paused;
    GoalService::apply_contribution(&mut g, dec!(500));

    // Auto-completion only applies to active goals.
    assert_eq!(g.status, GoalStatus::Paused);
    assert_eq!(g.contributed, dec!(1400));
}

#[test]
fn test_materialized_contribution_transaction() {
    let g = goal(dec!(1000), dec!(0), date(2024, 12, 1));
    let tx = GoalService::materialize_contribution(&g, dec!(200), date(2024, 3, 5), Some("bonus"));

    assert_eq!(tx.category, Category::Investment);
    assert_eq!(tx.amount, dec!(200));
    assert_eq!(tx.date, date(2024, 3, 5));
    assert_eq!(tx.note.as_deref(), Some("bonus (Goal: Emergency fund)"));
}

#[test]
fn test_materialized_contribution_without_note() {
    let g = goal(dec!(1000), dec!(0), date(2024, 12, 1));
    let tx = GoalService::materialize_contribution(&g, dec!(200), date(2024, 3, 5), None);

    assert_eq!(tx.note.as_deref(), Some("(Goal: Emergency fund)"));
}

#[test]
fn test_validations() {
    assert!(GoalService::validate_new_goal("Car", dec!(1)).is_ok());
    assert_eq!(
        GoalService::validate_new_goal("  ", dec!(1)),
        Err(GoalError::EmptyName)
    );
    assert_eq!(
        GoalService::validate_new_goal("Car", dec!(0)),
        Err(GoalError::NonPositiveTarget)
    );
    assert_eq!(
        GoalService::validate_new_goal("Car", dec!(-5)),
        Err(GoalError::NonPositiveTarget)
    );

    assert!(GoalService::validate_contribution(dec!(0.01)).is_ok());
    assert_eq!(
        GoalService::validate_contribution(dec!(0)),
        Err(GoalError::NonPositiveAmount)
    );
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    /// Need figures stay within their documented ranges for any inputs.
    #[test]
    fn prop_need_is_total_and_bounded(
        target in (1i64..100_000_000).prop_map(|n| Decimal::new(n, 2)),
        contributed in amount_strategy(),
        month_offset in -24i32..24,
    ) {
        let today = date(2024, 6, 15);
        let target_date = if month_offset >= 0 {
            #[allow(clippy::cast_sign_loss)]
            let months = month_offset as u32;
            date(2024 + ((5 + months) / 12) as i32, (5 + months) % 12 + 1, 15)
        } else {
            date(2023, 12, 15)
        };

        let g = goal(target, contributed, target_date);
        let need = GoalNeed::calculate(&g, today);

        prop_assert!(need.remaining >= Decimal::ZERO);
        prop_assert!(need.months_left >= 1);
        prop_assert!(need.monthly_needed >= Decimal::ZERO);
        prop_assert!(need.progress_pct >= Decimal::ZERO);
        prop_assert!(need.progress_pct <= Decimal::ONE);

        if need.remaining > Decimal::ZERO {
            prop_assert_eq!(
                need.monthly_needed,
                need.remaining / Decimal::from(need.months_left)
            );
        } else {
            prop_assert_eq!(need.monthly_needed, Decimal::ZERO);
        }
    }
}
