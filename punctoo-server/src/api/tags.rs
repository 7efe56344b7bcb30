//! QR payloads: the IN and OUT URL of every tag

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use http::HeaderMap;
use http::header::HOST;
use shared::error::ApiResponse;
use shared::models::{Direction, ResolvedTag, TagLinks};

use super::ApiResult;
use super::scan::scan_path;
use crate::db::scan_tags;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/tags", get(list_tags))
}

pub async fn list_tags(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Vec<TagLinks>> {
    let base = base_url(state.public_base_url.as_deref(), &headers);
    let links = scan_tags::list_resolved(&state.pool)
        .await?
        .into_iter()
        .map(|tag| tag_links(&base, tag))
        .collect();
    Ok(ApiResponse::success(links))
}

/// Configured public URL, otherwise the scheme and host the request came in on
fn base_url(configured: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(base) = configured {
        return base.trim_end_matches('/').to_string();
    }
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let scheme = header("x-forwarded-proto").unwrap_or_else(|| "http".to_string());
    let host = header("x-forwarded-host")
        .or_else(|| header(HOST.as_str()))
        .unwrap_or_else(|| "localhost".to_string());
    format!("{scheme}://{host}")
}

fn tag_links(base: &str, tag: ResolvedTag) -> TagLinks {
    TagLinks {
        in_url: format!("{base}{}", scan_path(tag.tag_id, Direction::In)),
        out_url: format!("{base}{}", scan_path(tag.tag_id, Direction::Out)),
        tag_id: tag.tag_id,
        tag_name: tag.tag_name,
        company_name: tag.company_name,
    }
}
