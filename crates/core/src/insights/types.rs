//! Insight data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finplan_shared::types::YearMonth;

/// One month's income and expense flow, the input to the insight builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthFlow {
    /// The month.
    pub month: YearMonth,
    /// Income for the month.
    pub income: Decimal,
    /// Expense for the month.
    pub expense: Decimal,
}

impl MonthFlow {
    /// Net savings for the month.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.income - self.expense
    }

    /// Returns true when the month saw any activity at all.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        !self.income.is_zero() || !self.expense.is_zero()
    }
}

/// Chart-ready month-over-month series, oldest month first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Month labels (e.g., "Jan 24").
    pub labels: Vec<String>,
    /// Income amounts.
    pub income: Vec<Decimal>,
    /// Expense amounts.
    pub expense: Vec<Decimal>,
    /// Savings amounts (income - expense).
    pub savings: Vec<Decimal>,
}

/// Savings prediction for the coming month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsForecast {
    /// Predicted net savings for next month.
    pub next_month_savings: Decimal,
    /// The per-month savings history the prediction was derived from.
    pub history: Vec<Decimal>,
    /// Explanatory note when there was no history to work from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
