//! Scan endpoints: `/t/{tag_id}/in` and `/t/{tag_id}/out`

use axum::Router;
use axum::extract::{Path, State};
use axum::routing::get;
use http::HeaderMap;
use shared::error::{ApiResponse, AppError};
use shared::models::{Direction, ResolvedTag, ScanOutcome, ScanResponse};

use super::ApiResult;
use super::cookie::device_token;
use crate::db::scan_tags;
use crate::error::ServiceResult;
use crate::services::recorder::{self, ScanTarget};
use crate::services::{CooldownGate, binding};
use crate::state::AppState;

/// Activation form action
pub const ACTIVATE_PATH: &str = "/activate";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/t/{tag_id}/in", get(scan_in))
        .route("/t/{tag_id}/out", get(scan_out))
}

pub async fn scan_in(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<ScanResponse> {
    scan(&state, &tag_id, Direction::In, &headers).await
}

pub async fn scan_out(
    State(state): State<AppState>,
    Path(tag_id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<ScanResponse> {
    scan(&state, &tag_id, Direction::Out, &headers).await
}

/// Path of the scan URL for one direction of a tag
pub fn scan_path(tag_id: i64, direction: Direction) -> String {
    match direction {
        Direction::In => format!("/t/{tag_id}/in"),
        Direction::Out => format!("/t/{tag_id}/out"),
    }
}

/// Tag id from a URL or form; anything that is not an integer names no tag
fn parse_tag_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::tag_not_found(raw))
}

pub(crate) async fn resolve_tag(state: &AppState, raw_tag_id: &str) -> ServiceResult<ResolvedTag> {
    let tag_id = parse_tag_id(raw_tag_id)?;
    Ok(scan_tags::resolve(&state.pool, tag_id)
        .await?
        .ok_or_else(|| AppError::tag_not_found(tag_id))?)
}

async fn scan(
    state: &AppState,
    raw_tag_id: &str,
    direction: Direction,
    headers: &HeaderMap,
) -> ApiResult<ScanResponse> {
    let tag = resolve_tag(state, raw_tag_id).await?;
    let token = device_token(headers, &state.cookie_name);

    let Some(bound) =
        binding::binding_for_company(&state.pool, token.as_deref(), tag.company_id).await?
    else {
        tracing::info!(tag_id = tag.tag_id, %direction, "Scan from unactivated device");
        return Ok(ApiResponse::success(activation_required(&tag, direction)));
    };

    let gate = CooldownGate::new(state.cooldown_minutes);
    let target = ScanTarget {
        company_id: tag.company_id,
        employee_id: bound.employee_id,
        scantag_id: tag.tag_id,
    };

    let response = match recorder::record(&state.pool, &gate, target, direction).await? {
        ScanOutcome::Recorded { event } => ScanResponse::Recorded {
            company_name: tag.company_name,
            event,
        },
        ScanOutcome::Skipped { direction, reason } => ScanResponse::Skipped {
            company_name: tag.company_name,
            direction,
            employee_name: bound.display_name,
            reason,
        },
    };
    Ok(ApiResponse::success(response))
}

fn activation_required(tag: &ResolvedTag, direction: Direction) -> ScanResponse {
    let hint = match direction {
        Direction::In => "Enter your activation code to link this phone to your name.",
        Direction::Out => {
            "This phone is not activated yet. Scan the IN code first and enter your activation code."
        }
    };
    ScanResponse::ActivationRequired {
        company_name: tag.company_name.clone(),
        tag_id: tag.tag_id,
        direction,
        activate_url: ACTIVATE_PATH.to_string(),
        hint: hint.to_string(),
    }
}
