//! Setup wizard routes
//!
//! Every step answers with the resulting setup state, whether or not it
//! changed anything.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Form, Router};
use shared::error::ApiResponse;
use shared::models::{CompanyCreate, EmployeeCreate, SetupOverview};

use super::ApiResult;
use crate::services::setup;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/setup", get(overview))
        .route("/setup/company", post(create_company))
        .route("/setup/employees", post(add_employee))
        .route("/setup/reset", post(reset))
}

async fn current(state: &AppState) -> ApiResult<SetupOverview> {
    let overview = setup::overview(&state.pool, state.max_employees).await?;
    Ok(ApiResponse::success(overview))
}

pub async fn overview(State(state): State<AppState>) -> ApiResult<SetupOverview> {
    current(&state).await
}

pub async fn create_company(
    State(state): State<AppState>,
    Form(data): Form<CompanyCreate>,
) -> ApiResult<SetupOverview> {
    setup::create_company(&state.pool, &data.name).await?;
    current(&state).await
}

pub async fn add_employee(
    State(state): State<AppState>,
    Form(data): Form<EmployeeCreate>,
) -> ApiResult<SetupOverview> {
    setup::add_employee(
        &state.pool,
        &data.display_name,
        state.max_employees,
        state.code_match,
    )
    .await?;
    current(&state).await
}

pub async fn reset(State(state): State<AppState>) -> ApiResult<SetupOverview> {
    setup::reset(&state.pool).await?;
    current(&state).await
}
