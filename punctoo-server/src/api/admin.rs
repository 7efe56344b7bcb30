use axum::Router;
use axum::extract::State;
use axum::routing::get;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::AdminReport;

use super::ApiResult;
use crate::services::status;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/admin", get(report))
}

/// Latest IN/OUT and status per employee, computed on every request
pub async fn report(State(state): State<AppState>) -> ApiResult<AdminReport> {
    let report = status::admin_report(&state.pool)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CompanyNotFound))?;
    Ok(ApiResponse::success(report))
}
