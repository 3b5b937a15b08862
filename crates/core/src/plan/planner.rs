//! Proportional surplus allocation.

use rust_decimal::Decimal;

use super::types::{Plan, PlanGoal, PlanItem};

/// Distributes a monthly surplus across active goals.
pub struct AllocationPlanner;

impl AllocationPlanner {
    /// Allocates `available` (or `monthly_cap` when given) across the goals'
    /// monthly needs.
    ///
    /// Policy - proportional, capped at need:
    /// - pool >= total need: every goal receives exactly its need; residual
    ///   surplus is left unallocated.
    /// - pool < total need: every goal receives
    ///   `monthly_needed * (pool / total_need)` - the same shortfall ratio
    ///   for all goals.
    /// - total need = 0: every item receives zero.
    ///
    /// The cap overrides (does not add to) `available` as the allocation
    /// ceiling, but the returned `Plan.available` always reports the
    /// original pre-cap figure. A non-positive pool allocates nothing.
    /// Item order follows the input order. Amounts are kept exact; display
    /// rounding belongs to the caller's boundary.
    #[must_use]
    pub fn plan(available: Decimal, goals: &[PlanGoal], monthly_cap: Option<Decimal>) -> Plan {
        let total_need: Decimal = goals
            .iter()
            .map(|g| g.monthly_needed)
            .filter(|needed| *needed > Decimal::ZERO)
            .sum();

        let pool = monthly_cap.unwrap_or(available).max(Decimal::ZERO);

        let scale = if total_need.is_zero() {
            Decimal::ZERO
        } else if pool >= total_need {
            Decimal::ONE
        } else {
            pool / total_need
        };

        let items = goals
            .iter()
            .map(|g| PlanItem {
                goal_id: g.goal_id,
                name: g.name.clone(),
                allocated: if g.monthly_needed > Decimal::ZERO {
                    g.monthly_needed * scale
                } else {
                    Decimal::ZERO
                },
            })
            .collect();

        Plan {
            available,
            total_need,
            items,
        }
    }
}
