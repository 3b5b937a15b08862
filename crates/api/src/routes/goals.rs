//! Goal management and allocation planning routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use finplan_core::goal::{Goal, GoalError, GoalNeed, GoalService, GoalStatus};
use finplan_core::ledger::summarize;
use finplan_core::plan::{AllocationPlanner, PlanGoal};
use finplan_shared::types::{GoalId, YearMonth};
use finplan_store::{NewGoal, StoreError};

use crate::AppState;

/// Creates the goal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/goals", get(list_goals))
        .route("/goals", post(create_goal))
        .route("/goals/plan", get(allocation_plan))
        .route("/goals/{goal_id}/contrib", post(contribute))
        .route("/goals/{goal_id}/status", post(change_status))
        .route("/goals/{goal_id}", delete(delete_goal))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating a goal.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    /// Display name.
    pub name: String,
    /// Target amount, must be positive.
    pub target_amount: Decimal,
    /// Date the target should be reached by.
    pub target_date: NaiveDate,
}

/// Request body for recording a contribution.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributeRequest {
    /// Contribution amount, must be positive.
    pub amount: Decimal,
    /// Contribution date; defaults to today.
    pub date: Option<NaiveDate>,
    /// Optional note.
    pub note: Option<String>,
    /// When true, also record an `INVESTMENT` transaction.
    #[serde(default)]
    pub affects_budget: bool,
}

/// Query parameter for the status toggle.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// The new status.
    pub value: GoalStatus,
}

/// Query parameter for the allocation plan.
#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    /// Optional monthly cap overriding the income-derived pool.
    pub monthly: Option<Decimal>,
}

/// A goal with its embedded need figures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalViewResponse {
    /// Goal ID.
    pub id: GoalId,
    /// Display name.
    pub name: String,
    /// Target amount.
    pub target_amount: String,
    /// Target date.
    pub target_date: NaiveDate,
    /// Lifecycle status.
    pub status: GoalStatus,
    /// Contributed so far (stored total, may exceed the target).
    pub contributed: String,
    /// Amount still missing, clamped to zero.
    pub remaining: String,
    /// Months left until the target month, floor of 1.
    pub months_left: u32,
    /// Needed contribution per remaining month.
    pub monthly_needed: String,
    /// Progress ratio in [0, 1].
    pub progress_pct: String,
}

impl GoalViewResponse {
    fn build(goal: Goal, today: NaiveDate) -> Self {
        let need = GoalNeed::calculate(&goal, today);
        Self {
            id: goal.id,
            name: goal.name,
            target_amount: goal.target_amount.round_dp(2).to_string(),
            target_date: goal.target_date,
            status: goal.status,
            contributed: goal.contributed.round_dp(2).to_string(),
            remaining: need.remaining.round_dp(2).to_string(),
            months_left: need.months_left,
            monthly_needed: need.monthly_needed.round_dp(2).to_string(),
            progress_pct: need.progress_pct.round_dp(4).to_string(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Maps goal validation errors to HTTP responses.
fn map_goal_error(e: &GoalError) -> axum::response::Response {
    match e {
        GoalError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": "not_found",
                "message": format!("Goal not found: {id}")
            })),
        )
            .into_response(),
        GoalError::NonPositiveTarget => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "non_positive_target",
                "message": "Target amount must be positive"
            })),
        )
            .into_response(),
        GoalError::EmptyName => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "empty_name",
                "message": "Goal name must not be empty"
            })),
        )
            .into_response(),
        GoalError::NonPositiveAmount => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "non_positive_amount",
                "message": "Contribution amount must be positive"
            })),
        )
            .into_response(),
    }
}

/// Maps store lookup failures to HTTP responses.
fn map_store_error(e: &StoreError) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "not_found",
            "message": e.to_string()
        })),
    )
        .into_response()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/goals` - List goals with their need figures.
///
/// Paused and completed goals are included here for display; only active
/// goals enter the allocation plan.
async fn list_goals(State(state): State<AppState>) -> impl IntoResponse {
    let today = Local::now().date_naive();
    let response: Vec<GoalViewResponse> = state
        .goals
        .list()
        .into_iter()
        .map(|goal| GoalViewResponse::build(goal, today))
        .collect();

    (StatusCode::OK, Json(response))
}

/// POST `/goals` - Create a goal.
async fn create_goal(
    State(state): State<AppState>,
    Json(payload): Json<CreateGoalRequest>,
) -> impl IntoResponse {
    if let Err(e) = GoalService::validate_new_goal(&payload.name, payload.target_amount) {
        return map_goal_error(&e);
    }

    let goal = state.goals.create(NewGoal {
        name: payload.name,
        target_amount: payload.target_amount,
        target_date: payload.target_date,
    });

    info!(goal_id = %goal.id, name = %goal.name, "Goal created");

    (StatusCode::CREATED, Json(json!({ "id": goal.id }))).into_response()
}

/// GET `/goals/plan?monthly` - Allocation plan over the active goals.
///
/// The pool defaults to the current month's savings (income - expense); the
/// optional `monthly` cap overrides the pool but the response still reports
/// the income-derived availability.
async fn allocation_plan(
    State(state): State<AppState>,
    Query(query): Query<PlanQuery>,
) -> impl IntoResponse {
    let today = Local::now().date_naive();
    let month = YearMonth::from_date(today);

    let transactions = state.transactions.list();
    let ledger = summarize(
        &transactions,
        Some(month.first_day()),
        Some(month.last_day()),
    );
    let available = ledger.savings;

    let plan_goals: Vec<PlanGoal> = state
        .goals
        .list()
        .into_iter()
        .filter(|goal| goal.status.is_plannable())
        .map(|goal| {
            let need = GoalNeed::calculate(&goal, today);
            PlanGoal {
                goal_id: goal.id,
                name: goal.name,
                monthly_needed: need.monthly_needed,
            }
        })
        .collect();

    let plan = AllocationPlanner::plan(available, &plan_goals, query.monthly);

    let items: Vec<serde_json::Value> = plan
        .items
        .iter()
        .map(|item| {
            json!({
                "goalId": item.goal_id,
                "name": item.name,
                "allocated": item.allocated.round_dp(2).to_string()
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({
            "available": plan.available.round_dp(2).to_string(),
            "totalNeed": plan.total_need.round_dp(2).to_string(),
            "items": items
        })),
    )
        .into_response()
}

/// POST `/goals/{goal_id}/contrib` - Record a contribution.
///
/// With `affects_budget` set, the contribution is also materialized as an
/// `INVESTMENT` transaction so it participates in ledger totals.
async fn contribute(
    State(state): State<AppState>,
    Path(goal_id): Path<GoalId>,
    Json(payload): Json<ContributeRequest>,
) -> impl IntoResponse {
    if let Err(e) = GoalService::validate_contribution(payload.amount) {
        return map_goal_error(&e);
    }

    let date = payload.date.unwrap_or_else(|| Local::now().date_naive());

    match state.goals.contribute(
        goal_id,
        payload.amount,
        date,
        payload.note,
        payload.affects_budget,
    ) {
        Ok((contribution, materialized)) => {
            if let Some(tx) = materialized {
                state.transactions.insert_transaction(tx);
            }

            info!(
                %goal_id,
                contribution_id = %contribution.id,
                affects_budget = contribution.affects_budget,
                "Contribution recorded"
            );

            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => map_store_error(&e),
    }
}

/// POST `/goals/{goal_id}/status?value` - Toggle a goal's status.
async fn change_status(
    State(state): State<AppState>,
    Path(goal_id): Path<GoalId>,
    Query(query): Query<StatusQuery>,
) -> impl IntoResponse {
    match state.goals.set_status(goal_id, query.value) {
        Ok(goal) => {
            info!(%goal_id, status = %goal.status, "Goal status changed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => map_store_error(&e),
    }
}

/// DELETE `/goals/{goal_id}` - Delete a goal and its contributions.
async fn delete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<GoalId>,
) -> impl IntoResponse {
    match state.goals.delete(goal_id) {
        Ok(()) => {
            info!(%goal_id, "Goal deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => map_store_error(&e),
    }
}
