//! Per-goal need calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finplan_shared::types::YearMonth;

use super::types::Goal;

/// Derived contribution requirements for one goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalNeed {
    /// Amount still missing, clamped to zero (over-saving reads as done).
    pub remaining: Decimal,
    /// Whole months left until the target month, counting the current
    /// month; never less than 1.
    pub months_left: u32,
    /// Contribution needed each remaining month; zero once the target is
    /// covered.
    pub monthly_needed: Decimal,
    /// `contributed / target_amount` clamped to [0, 1].
    pub progress_pct: Decimal,
}

impl GoalNeed {
    /// Calculates the need figures for a goal as of `today`.
    ///
    /// Month distance is counted on calendar months, inclusive of the
    /// target month: a target in the current month is 1 month away. A
    /// target date already in the past collapses to the 1-month floor, so
    /// the goal reads as needing its full remaining amount now. Every
    /// denominator is guarded; this function never fails.
    #[must_use]
    pub fn calculate(goal: &Goal, today: NaiveDate) -> Self {
        let remaining = (goal.target_amount - goal.contributed).max(Decimal::ZERO);

        let this_month = YearMonth::from_date(today);
        let target_month = YearMonth::from_date(goal.target_date);
        let months_left = this_month.months_until_inclusive(target_month).max(1);

        let monthly_needed = if remaining > Decimal::ZERO {
            remaining / Decimal::from(months_left)
        } else {
            Decimal::ZERO
        };

        let progress_pct = if goal.target_amount > Decimal::ZERO {
            (goal.contributed / goal.target_amount).min(Decimal::ONE)
        } else {
            Decimal::ZERO
        };

        Self {
            remaining,
            months_left,
            monthly_needed,
            progress_pct,
        }
    }
}
