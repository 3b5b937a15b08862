//! Transaction recording routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use finplan_core::ledger::{Category, Transaction};
use finplan_shared::types::TransactionId;
use finplan_store::{NewTransaction, StoreError};

use crate::AppState;

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions", post(create_transaction))
        .route("/transactions/summary", get(range_summary))
        .route("/transactions/{tx_id}", delete(delete_transaction))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for recording a transaction.
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    /// Category.
    pub category: Category,
    /// Amount, must be non-negative.
    pub amount: Decimal,
    /// Calendar date.
    pub date: NaiveDate,
    /// Optional note.
    pub note: Option<String>,
}

/// Response for a transaction.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Transaction ID.
    pub id: TransactionId,
    /// Category.
    pub category: Category,
    /// Amount.
    pub amount: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Note, if any.
    pub note: Option<String>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        Self {
            id: tx.id,
            category: tx.category,
            amount: tx.amount.round_dp(2).to_string(),
            date: tx.date,
            note: tx.note,
        }
    }
}

/// Query parameters for the range summary.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Range start (inclusive).
    pub start: NaiveDate,
    /// Range end (inclusive).
    pub end: NaiveDate,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/transactions` - List all transactions.
async fn list_transactions(State(state): State<AppState>) -> impl IntoResponse {
    let response: Vec<TransactionResponse> = state
        .transactions
        .list()
        .into_iter()
        .map(TransactionResponse::from)
        .collect();

    (StatusCode::OK, Json(response))
}

/// POST `/transactions` - Record a transaction.
async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransactionRequest>,
) -> impl IntoResponse {
    if payload.amount < Decimal::ZERO {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "negative_amount",
                "message": "Amount cannot be negative"
            })),
        )
            .into_response();
    }

    let tx = state.transactions.insert(NewTransaction {
        category: payload.category,
        amount: payload.amount,
        date: payload.date,
        note: payload.note,
    });

    info!(
        tx_id = %tx.id,
        category = %tx.category,
        date = %tx.date,
        "Transaction recorded"
    );

    (StatusCode::CREATED, Json(TransactionResponse::from(tx))).into_response()
}

/// GET `/transactions/summary?start&end` - Count and total over a date range.
async fn range_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> impl IntoResponse {
    let txs = state.transactions.list();
    // Same inclusive-range rule as the ledger view.
    let in_range: Vec<_> = txs
        .iter()
        .filter(|tx| tx.date >= query.start && tx.date <= query.end)
        .collect();
    let total: Decimal = in_range.iter().map(|tx| tx.amount).sum();

    (
        StatusCode::OK,
        Json(json!({
            "count": in_range.len(),
            "total": total.round_dp(2).to_string()
        })),
    )
}

/// DELETE `/transactions/{tx_id}` - Delete a transaction.
async fn delete_transaction(
    State(state): State<AppState>,
    Path(tx_id): Path<TransactionId>,
) -> impl IntoResponse {
    match state.transactions.delete(tx_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(StoreError::TransactionNotFound(id)) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": format!("Transaction not found: {id}")
            })),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "error": "internal_error",
                "message": "An error occurred"
            })),
        )
            .into_response(),
    }
}
