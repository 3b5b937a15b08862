//! Trend and forecast routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;

use finplan_core::insights::{self, MonthFlow};
use finplan_core::ledger::{Transaction, summarize};
use finplan_shared::types::YearMonth;

use crate::AppState;

/// Hard bounds on the trend window.
const MIN_TREND_MONTHS: u32 = 1;
const MAX_TREND_MONTHS: u32 = 24;

/// Creates the insight routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/insights/trend", get(trend))
        .route("/insights/forecast", get(forecast))
}

/// Query parameters for the trend view.
#[derive(Debug, Deserialize)]
pub struct TrendQuery {
    /// Number of months to include; clamped to 1-24.
    pub months: Option<u32>,
}

/// Computes one month's flow from a transaction snapshot.
fn month_flow(transactions: &[Transaction], month: YearMonth) -> MonthFlow {
    let ledger = summarize(
        transactions,
        Some(month.first_day()),
        Some(month.last_day()),
    );
    MonthFlow {
        month,
        income: ledger.income,
        expense: ledger.expense,
    }
}

/// The last `count` calendar months ending with `last`, oldest first.
fn months_ending_at(last: YearMonth, count: u32) -> Vec<YearMonth> {
    let mut month = last;
    for _ in 1..count {
        month = month.prev();
    }

    let mut months = Vec::with_capacity(count as usize);
    for _ in 0..count {
        months.push(month);
        month = month.next();
    }
    months
}

/// GET `/insights/trend?months` - Month-over-month income/expense/savings
/// series ending with the current month.
async fn trend(
    State(state): State<AppState>,
    Query(query): Query<TrendQuery>,
) -> impl IntoResponse {
    let count = query
        .months
        .unwrap_or(state.planning.trend_months)
        .clamp(MIN_TREND_MONTHS, MAX_TREND_MONTHS);

    let current = YearMonth::from_date(Local::now().date_naive());
    let transactions = state.transactions.list();

    let flows: Vec<MonthFlow> = months_ending_at(current, count)
        .into_iter()
        .map(|month| month_flow(&transactions, month))
        .collect();

    let report = insights::trend(&flows);

    let to_strings =
        |values: &[Decimal]| -> Vec<String> { values.iter().map(|v| v.round_dp(2).to_string()).collect() };

    (
        StatusCode::OK,
        Json(json!({
            "labels": report.labels,
            "income": to_strings(&report.income),
            "expense": to_strings(&report.expense),
            "savings": to_strings(&report.savings)
        })),
    )
}

/// GET `/insights/forecast` - Predicted next-month savings from the trailing
/// full months.
async fn forecast(State(state): State<AppState>) -> impl IntoResponse {
    let current = YearMonth::from_date(Local::now().date_naive());
    let transactions = state.transactions.list();

    // Trailing full months only; the running month would skew the average.
    let flows: Vec<MonthFlow> = months_ending_at(current.prev(), state.planning.forecast_history_months)
        .into_iter()
        .map(|month| month_flow(&transactions, month))
        .collect();

    let result = insights::forecast(&flows);

    let history: Vec<String> = result
        .history
        .iter()
        .map(|v| v.round_dp(2).to_string())
        .collect();

    let mut body = json!({
        "next_month_savings": result.next_month_savings.round_dp(2).to_string(),
        "history": history
    });
    if let Some(note) = result.note {
        body["note"] = json!(note);
    }

    (StatusCode::OK, Json(body))
}
