#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, Response, header};
use http_body_util::BodyExt;
use punctoo_server::config::CodeMatch;
use punctoo_server::services::setup;
use punctoo_server::{AppState, Config, api};
use shared::models::{Company, Direction, Employee, ScanTag};
use sqlx::PgPool;
use tower::ServiceExt;

pub const COOKIE_NAME: &str = "punctoo_device_token";

/// Seeded pilot: one company, its tag, two employees
pub struct Pilot {
    pub company: Company,
    pub tag: ScanTag,
    pub employees: Vec<Employee>,
}

pub async fn seed(pool: &PgPool) -> Pilot {
    setup::create_company(pool, "ACME").await.unwrap();
    setup::add_employee(pool, "Alice", 2, CodeMatch::Exact).await.unwrap();
    setup::add_employee(pool, "Bob", 2, CodeMatch::Exact).await.unwrap();

    let overview = setup::overview(pool, 2).await.unwrap();
    Pilot {
        company: overview.company.unwrap(),
        tag: overview.scan_tag.unwrap(),
        employees: overview.employees,
    }
}

/// Insert an event `minutes_ago` minutes in the past, bypassing the recorder
pub async fn backdated_event(
    pool: &PgPool,
    pilot: &Pilot,
    employee_id: i64,
    direction: Direction,
    minutes_ago: i64,
) {
    sqlx::query(
        "INSERT INTO scan_events (company_id, employee_id, scantag_id, direction, timestamp)
            VALUES ($1, $2, $3, $4, NOW() - make_interval(mins => $5::int))",
    )
    .bind(pilot.company.id)
    .bind(employee_id)
    .bind(pilot.tag.id)
    .bind(direction.as_str())
    .bind(minutes_ago as i32)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn count_events(pool: &PgPool, employee_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM scan_events WHERE employee_id = $1")
        .bind(employee_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn app(pool: PgPool) -> Router {
    let config = Config::with_database_url("postgres://unused");
    api::create_router(AppState::from_pool(pool, &config))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("{COOKIE_NAME}={token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, form: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(
        header::CONTENT_TYPE,
        "application/x-www-form-urlencoded",
    );
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("{COOKIE_NAME}={token}"));
    }
    builder.body(Body::from(form.to_string())).unwrap()
}

pub async fn json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Token value from a Set-Cookie header
pub fn cookie_token(response: &Response<Body>) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    let first = set_cookie.split(';').next().unwrap();
    first
        .strip_prefix(&format!("{COOKIE_NAME}="))
        .unwrap()
        .to_string()
}
