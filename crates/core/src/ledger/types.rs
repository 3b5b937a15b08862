//! Ledger domain types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use finplan_shared::types::TransactionId;

/// Transaction category.
///
/// A closed classification: `Income` is the only inflow, every other
/// category is an expense. Amounts are stored unsigned; direction is implied
/// by the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Salary and other inflows.
    Income,
    /// Rent, mortgage, home maintenance.
    Housing,
    /// Groceries and dining.
    Food,
    /// Commute, fuel, vehicle costs.
    Transport,
    /// Electricity, water, internet.
    Utilities,
    /// Leisure spending.
    Entertainment,
    /// Medical and insurance costs.
    Health,
    /// Transfers into savings and investment vehicles.
    Investment,
    /// Anything that fits nowhere else.
    Other,
}

impl Category {
    /// All expense (non-income) categories, in display order.
    pub const EXPENSES: [Self; 8] = [
        Self::Housing,
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Entertainment,
        Self::Health,
        Self::Investment,
        Self::Other,
    ];

    /// Returns true if this category is an expense (outflow).
    #[must_use]
    pub const fn is_expense(self) -> bool {
        !matches!(self, Self::Income)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Income => "INCOME",
            Self::Housing => "HOUSING",
            Self::Food => "FOOD",
            Self::Transport => "TRANSPORT",
            Self::Utilities => "UTILITIES",
            Self::Entertainment => "ENTERTAINMENT",
            Self::Health => "HEALTH",
            Self::Investment => "INVESTMENT",
            Self::Other => "OTHER",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INCOME" => Ok(Self::Income),
            "HOUSING" => Ok(Self::Housing),
            "FOOD" => Ok(Self::Food),
            "TRANSPORT" => Ok(Self::Transport),
            "UTILITIES" => Ok(Self::Utilities),
            "ENTERTAINMENT" => Ok(Self::Entertainment),
            "HEALTH" => Ok(Self::Health),
            "INVESTMENT" => Ok(Self::Investment),
            "OTHER" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// A recorded transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Category.
    pub category: Category,
    /// Amount, always non-negative; direction is implied by the category.
    pub amount: Decimal,
    /// Calendar date the transaction occurred.
    pub date: NaiveDate,
    /// Optional free-form note.
    pub note: Option<String>,
}

/// Aggregated view of a set of transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Sum of `Income` amounts.
    pub income: Decimal,
    /// Sum of all non-income amounts.
    pub expense: Decimal,
    /// `income - expense`; may be negative.
    pub savings: Decimal,
    /// Spend per expense category; every expense category is present,
    /// defaulting to zero.
    pub by_category: BTreeMap<Category, Decimal>,
}

impl LedgerSummary {
    /// An all-zero summary with every expense category present.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            savings: Decimal::ZERO,
            by_category: Category::EXPENSES
                .iter()
                .map(|c| (*c, Decimal::ZERO))
                .collect(),
        }
    }
}
