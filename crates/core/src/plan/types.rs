//! Allocation plan types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finplan_shared::types::GoalId;

/// One active goal entering the allocation, with its monthly need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanGoal {
    /// Goal ID.
    pub goal_id: GoalId,
    /// Goal name, carried through for display.
    pub name: String,
    /// The goal's monthly needed contribution.
    pub monthly_needed: Decimal,
}

/// One goal's share of the allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanItem {
    /// Goal ID.
    pub goal_id: GoalId,
    /// Goal name.
    pub name: String,
    /// Amount allocated this month, never negative.
    pub allocated: Decimal,
}

/// The monthly allocation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// The income-derived surplus, reported pre-cap for transparency.
    pub available: Decimal,
    /// Sum of the positive monthly needs across active goals.
    pub total_need: Decimal,
    /// Per-goal allocations, in the input (creation) order.
    pub items: Vec<PlanItem>,
}
