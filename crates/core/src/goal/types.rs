//! Goal data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finplan_shared::types::{ContributionId, GoalId};

/// Goal lifecycle status.
///
/// Created `Active`; `Active <-> Paused` is user-toggled; `Completed` is
/// reached by explicit action or automatically once the contributed total
/// covers the target, and is terminal for planning purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalStatus {
    /// Goal participates in planning.
    Active,
    /// Goal is on hold; reported but never allocated to.
    Paused,
    /// Goal is done; excluded from planning.
    Completed,
}

impl GoalStatus {
    /// Returns true if the goal participates in allocation planning.
    #[must_use]
    pub const fn is_plannable(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Paused => write!(f, "PAUSED"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl std::str::FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "PAUSED" => Ok(Self::Paused),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(format!("Unknown goal status: {s}")),
        }
    }
}

/// A savings goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal ID.
    pub id: GoalId,
    /// Display name.
    pub name: String,
    /// Target amount, always positive.
    pub target_amount: Decimal,
    /// Date the target should be reached by.
    pub target_date: NaiveDate,
    /// Lifecycle status.
    pub status: GoalStatus,
    /// Running total of contributions. May exceed the target (over-saving
    /// is allowed); display clamping happens in the need calculation.
    pub contributed: Decimal,
    /// Creation timestamp; goal lists and plans preserve creation order.
    pub created_at: DateTime<Utc>,
}

/// A single contribution towards a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Contribution ID.
    pub id: ContributionId,
    /// Goal this contribution belongs to.
    pub goal_id: GoalId,
    /// Contributed amount, always positive.
    pub amount: Decimal,
    /// Calendar date of the contribution.
    pub date: NaiveDate,
    /// Optional free-form note.
    pub note: Option<String>,
    /// When true, the contribution was also materialized as an
    /// `Investment` transaction so it shows up in ledger totals.
    pub affects_budget: bool,
}
