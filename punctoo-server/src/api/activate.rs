//! Device activation (pairing)

use axum::extract::State;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::routing::post;
use axum::{Form, Router};
use http::HeaderMap;
use http::header::SET_COOKIE;
use shared::error::ApiResponse;
use shared::models::{ActivateRequest, Direction, ScanResponse};

use super::cookie::{DeviceCookie, device_token};
use super::scan::{resolve_tag, scan_path};
use crate::error::ServiceError;
use crate::services::binding::{self, Activation};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/activate", post(activate))
        .route("/pair", post(activate))
}

/// Bind this device to the employee owning `code`
///
/// On success: 303 to the tag's IN URL with the new device cookie, so the
/// first IN is recorded right away. An unknown code answers with
/// `unknown_code` and the URL to retry from.
pub async fn activate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(req): Form<ActivateRequest>,
) -> Result<Response, ServiceError> {
    let tag = resolve_tag(&state, &req.tag_id).await?;
    let stale_token = device_token(&headers, &state.cookie_name);

    match binding::activate(
        &state.pool,
        &tag,
        &req.code,
        state.code_match,
        stale_token.as_deref(),
    )
    .await?
    {
        Activation::Bound { token, .. } => {
            let cookie = DeviceCookie::new(&state.cookie_name, &token, state.secure_cookies);
            Ok((
                AppendHeaders([(SET_COOKIE, cookie.to_header_value())]),
                Redirect::to(&scan_path(tag.tag_id, Direction::In)),
            )
                .into_response())
        }
        Activation::UnknownCode => Ok(ApiResponse::success(ScanResponse::UnknownCode {
            retry_url: scan_path(tag.tag_id, Direction::In),
            company_name: tag.company_name,
            tag_id: tag.tag_id,
        })
        .into_response()),
    }
}
