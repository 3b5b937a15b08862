//! Budget limit and overview routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use finplan_core::budget::{BudgetError, BudgetLimit, BudgetService, CategoryRow, MonthTotals};
use finplan_core::ledger::{Category, summarize};
use finplan_shared::types::{BudgetLimitId, YearMonth};

use crate::AppState;

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_limits))
        .route("/budgets", put(replace_limits))
        .route("/budgets/overview", get(overview))
        .route("/budgets/copy", post(copy_limits))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters addressing one month.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    /// Calendar year.
    pub year: i32,
    /// Month of year (1-12).
    pub month: u32,
}

/// Request body for replacing a month's limits.
#[derive(Debug, Deserialize)]
pub struct ReplaceLimitsRequest {
    /// The month's full limit set.
    pub items: Vec<LimitItem>,
}

/// One limit entry.
#[derive(Debug, Deserialize)]
pub struct LimitItem {
    /// Expense category.
    pub category: Category,
    /// Limit amount; missing reads as zero.
    pub limit: Option<Decimal>,
}

/// Query parameters for the copy operation.
#[derive(Debug, Deserialize)]
pub struct CopyQuery {
    /// Source year.
    pub from_year: i32,
    /// Source month.
    pub from_month: u32,
    /// Target year.
    pub to_year: i32,
    /// Target month.
    pub to_month: u32,
}

/// Response for a stored budget limit.
#[derive(Debug, Serialize)]
pub struct LimitResponse {
    /// Limit ID.
    pub id: BudgetLimitId,
    /// Expense category.
    pub category: Category,
    /// Calendar year.
    pub year: i32,
    /// Month of year.
    pub month: u32,
    /// Limit amount.
    pub limit: String,
}

impl From<BudgetLimit> for LimitResponse {
    fn from(limit: BudgetLimit) -> Self {
        Self {
            id: limit.id,
            category: limit.category,
            year: limit.month.year(),
            month: limit.month.month(),
            limit: limit.limit.round_dp(2).to_string(),
        }
    }
}

/// One row of the overview response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRowResponse {
    /// Expense category.
    pub category: Category,
    /// Configured limit.
    pub limit: String,
    /// Spent amount.
    pub spent: String,
    /// Remaining amount (negative when over budget).
    pub remaining: String,
    /// Spend-to-limit ratio.
    pub pct: String,
    /// Over-budget flag.
    pub over_budget: bool,
}

impl From<CategoryRow> for CategoryRowResponse {
    fn from(row: CategoryRow) -> Self {
        Self {
            category: row.category,
            limit: row.limit.round_dp(2).to_string(),
            spent: row.spent.round_dp(2).to_string(),
            remaining: row.remaining.round_dp(2).to_string(),
            pct: row.pct.round_dp(4).to_string(),
            over_budget: row.over_budget,
        }
    }
}

/// Totals block of the overview response.
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    /// Income for the month.
    pub income: String,
    /// Expense for the month.
    pub expense: String,
    /// Savings for the month.
    pub savings: String,
    /// Sum of configured limits.
    pub budgeted: String,
}

impl From<MonthTotals> for TotalsResponse {
    fn from(totals: MonthTotals) -> Self {
        Self {
            income: totals.income.round_dp(2).to_string(),
            expense: totals.expense.round_dp(2).to_string(),
            savings: totals.savings.round_dp(2).to_string(),
            budgeted: totals.budgeted.round_dp(2).to_string(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parses a (year, month) pair, rejecting out-of-range months.
fn parse_month(year: i32, month: u32) -> Result<YearMonth, axum::response::Response> {
    YearMonth::new(year, month).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_month",
                "message": format!("Month must be between 1 and 12, got {month}")
            })),
        )
            .into_response()
    })
}

/// Maps budget validation errors to HTTP responses.
fn map_budget_error(e: &BudgetError) -> axum::response::Response {
    match e {
        BudgetError::NotBudgetable(category) => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "not_budgetable",
                "message": format!("Category {category} cannot carry a budget limit")
            })),
        )
            .into_response(),
        BudgetError::NegativeLimit => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "negative_limit",
                "message": "Limit cannot be negative"
            })),
        )
            .into_response(),
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/budgets?year&month` - List the limits stored for a month.
async fn list_limits(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> impl IntoResponse {
    let month = match parse_month(query.year, query.month) {
        Ok(month) => month,
        Err(response) => return response,
    };

    let response: Vec<LimitResponse> = state
        .budgets
        .month_limits(month)
        .into_iter()
        .map(LimitResponse::from)
        .collect();

    (StatusCode::OK, Json(response)).into_response()
}

/// PUT `/budgets?year&month` - Replace the month's limit set.
///
/// Full-replace semantics: a category omitted from the payload has no limit
/// afterwards and reads back as zero in the overview.
async fn replace_limits(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
    Json(payload): Json<ReplaceLimitsRequest>,
) -> impl IntoResponse {
    let month = match parse_month(query.year, query.month) {
        Ok(month) => month,
        Err(response) => return response,
    };

    let mut items: Vec<(Category, Decimal)> = Vec::with_capacity(payload.items.len());
    for item in &payload.items {
        let limit = item.limit.unwrap_or(Decimal::ZERO);
        if let Err(e) = BudgetService::validate_limit(item.category, limit) {
            return map_budget_error(&e);
        }
        items.push((item.category, limit));
    }

    let stored = state.budgets.replace_month(month, &items);

    info!(%month, count = stored.len(), "Budget limits replaced");

    let response: Vec<LimitResponse> = stored.into_iter().map(LimitResponse::from).collect();
    (StatusCode::OK, Json(response)).into_response()
}

/// GET `/budgets/overview?year&month` - Monthly budget overview.
async fn overview(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> impl IntoResponse {
    let month = match parse_month(query.year, query.month) {
        Ok(month) => month,
        Err(response) => return response,
    };

    let transactions = state.transactions.list();
    let ledger = summarize(
        &transactions,
        Some(month.first_day()),
        Some(month.last_day()),
    );
    let limits = state.budgets.month_limits(month);

    let overview = BudgetService::overview(month, &limits, &ledger);

    let rows: Vec<CategoryRowResponse> = overview
        .by_category
        .into_iter()
        .map(CategoryRowResponse::from)
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "totals": TotalsResponse::from(overview.totals),
            "byCategory": rows
        })),
    )
        .into_response()
}

/// POST `/budgets/copy?from_year&from_month&to_year&to_month` - Copy one
/// month's limits into another.
async fn copy_limits(
    State(state): State<AppState>,
    Query(query): Query<CopyQuery>,
) -> impl IntoResponse {
    let from = match parse_month(query.from_year, query.from_month) {
        Ok(month) => month,
        Err(response) => return response,
    };
    let to = match parse_month(query.to_year, query.to_month) {
        Ok(month) => month,
        Err(response) => return response,
    };

    let copied = state.budgets.copy_month(from, to);

    info!(%from, %to, copied, "Budget limits copied");

    (StatusCode::OK, Json(json!({ "copied": copied }))).into_response()
}
