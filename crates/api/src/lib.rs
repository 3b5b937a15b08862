//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for transactions, budgets, goals, and insights
//! - Request DTOs with boundary validation
//! - Response types and error mapping
//!
//! Handlers validate inputs, take a snapshot from the stores, and delegate
//! every computation to `finplan-core`; nothing is cached between requests.

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use finplan_shared::config::PlanningConfig;
use finplan_store::{BudgetStore, GoalStore, TransactionStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Transaction records.
    pub transactions: Arc<TransactionStore>,
    /// Budget limit records.
    pub budgets: Arc<BudgetStore>,
    /// Goal and contribution records.
    pub goals: Arc<GoalStore>,
    /// Planning defaults (trend window, forecast history).
    pub planning: PlanningConfig,
}

impl AppState {
    /// Creates a state with empty stores and the given planning defaults.
    #[must_use]
    pub fn new(planning: PlanningConfig) -> Self {
        Self {
            transactions: Arc::new(TransactionStore::new()),
            budgets: Arc::new(BudgetStore::new()),
            goals: Arc::new(GoalStore::new()),
            planning,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
