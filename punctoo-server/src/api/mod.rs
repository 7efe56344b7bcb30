//! HTTP routes for punctoo-server

pub mod activate;
pub mod admin;
pub mod cookie;
pub mod health;
pub mod scan;
pub mod setup;
pub mod tags;

use axum::Router;
use shared::error::ApiResponse;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::state::AppState;

/// Handler result: JSON envelope or a service error
pub type ApiResult<T> = Result<ApiResponse<T>, ServiceError>;

/// All routes, no middleware
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(scan::router())
        .merge(activate::router())
        .merge(admin::router())
        .merge(tags::router())
        .merge(setup::router())
        .merge(health::router())
}

/// Routes with middleware and state
pub fn create_router(state: AppState) -> Router {
    build_router()
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
