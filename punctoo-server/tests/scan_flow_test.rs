#![cfg(feature = "integration-tests")]

mod common;

use common::{app, cookie_token, get, json, post_form, send};
use http::{StatusCode, header};
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_setup_activate_scan_report(pool: PgPool) {
    let app = app(pool);

    // Setup wizard
    let res = send(&app, post_form("/setup/company", "name=ACME", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    send(&app, post_form("/setup/employees", "display_name=Alice", None)).await;
    send(&app, post_form("/setup/employees", "display_name=Bob", None)).await;
    // Over the cap: ignored
    send(&app, post_form("/setup/employees", "display_name=Carol", None)).await;

    let setup = json(send(&app, get("/setup", None)).await).await;
    let data = &setup["data"];
    assert_eq!(data["company"]["name"], "ACME");
    assert_eq!(data["employees"].as_array().unwrap().len(), 2);
    assert_eq!(data["scan_tag"]["name"], "ScanTag");
    assert_eq!(data["company_ok"], true);
    assert_eq!(data["employees_ok"], true);
    let tag_id = data["scan_tag"]["id"].as_i64().unwrap();
    let alice_code = data["employees"][0]["scan_code"].as_str().unwrap().to_string();

    // Unactivated device
    let body = json(send(&app, get(&format!("/t/{tag_id}/in"), None)).await).await;
    assert_eq!(body["data"]["outcome"], "activation_required");
    assert_eq!(body["data"]["activate_url"], "/activate");

    // Wrong code
    let res = send(
        &app,
        post_form("/activate", &format!("tag_id={tag_id}&code=wrong"), None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = json(res).await;
    assert_eq!(body["data"]["outcome"], "unknown_code");

    // Activation redirects to the IN scan
    let res = send(
        &app,
        post_form("/activate", &format!("tag_id={tag_id}&code={alice_code}"), None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()[header::LOCATION],
        format!("/t/{tag_id}/in").as_str()
    );
    let set_cookie = res.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Lax"));
    assert!(!set_cookie.contains("Secure"));
    let token = cookie_token(&res);

    let body = json(send(&app, get(&format!("/t/{tag_id}/in"), Some(&token))).await).await;
    assert_eq!(body["data"]["outcome"], "recorded");
    assert_eq!(body["data"]["event"]["employee_name"], "Alice");
    assert_eq!(body["data"]["event"]["direction"], "IN");

    let body = json(send(&app, get("/admin", None)).await).await;
    let alice = &body["data"]["employees"][0];
    assert_eq!(alice["display_name"], "Alice");
    assert_eq!(alice["status"], "open");
    assert!(alice["last_in"].is_string());
    assert!(alice["last_out"].is_null());
    assert_eq!(alice["duration_minutes"], 0);

    let body = json(send(&app, get(&format!("/t/{tag_id}/in"), Some(&token))).await).await;
    assert_eq!(body["data"]["outcome"], "skipped");
    assert_eq!(body["data"]["reason"], "Cooldown (60 min)");
    assert_eq!(body["data"]["employee_name"], "Alice");

    let body = json(send(&app, get(&format!("/t/{tag_id}/out"), Some(&token))).await).await;
    assert_eq!(body["data"]["outcome"], "recorded");
    assert_eq!(body["data"]["event"]["direction"], "OUT");

    // Report
    let body = json(send(&app, get("/admin", None)).await).await;
    let employees = body["data"]["employees"].as_array().unwrap();
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0]["display_name"], "Alice");
    assert_eq!(employees[0]["status"], "completed");
    assert_eq!(employees[0]["duration_minutes"], 0);
    assert_eq!(employees[1]["status"], "unknown");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pair_alias_and_reactivation(pool: PgPool) {
    let pilot = common::seed(&pool).await;
    let app = app(pool.clone());
    let tag_id = pilot.tag.id;
    let (alice, bob) = (&pilot.employees[0], &pilot.employees[1]);

    let res = send(
        &app,
        post_form("/pair", &format!("tag_id={tag_id}&code={}", alice.scan_code), None),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let old_token = cookie_token(&res);

    // Same phone re-activates as Bob, presenting its old cookie
    let res = send(
        &app,
        post_form(
            "/activate",
            &format!("tag_id={tag_id}&code={}", bob.scan_code),
            Some(&old_token),
        ),
    )
    .await;
    let new_token = cookie_token(&res);
    assert_ne!(old_token, new_token);

    let body = json(send(&app, get(&format!("/t/{tag_id}/in"), Some(&old_token))).await).await;
    assert_eq!(body["data"]["outcome"], "activation_required");

    let body = json(send(&app, get(&format!("/t/{tag_id}/in"), Some(&new_token))).await).await;
    assert_eq!(body["data"]["event"]["employee_name"], "Bob");

    let alice_bindings: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM device_bindings WHERE employee_id = $1")
            .bind(alice.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(alice_bindings, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_tag_is_not_found(pool: PgPool) {
    let app = app(pool);

    let res = send(&app, get("/t/999/in", None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = json(res).await;
    assert_eq!(body["code"], 6401);

    let res = send(&app, post_form("/activate", "tag_id=999&code=x", None)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_malformed_tag_id_is_not_found(pool: PgPool) {
    common::seed(&pool).await;
    let app = app(pool);

    for uri in ["/t/abc/in", "/t/abc/out", "/t/1.5/in"] {
        let res = send(&app, get(uri, None)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
        let body = json(res).await;
        assert_eq!(body["code"], 6401);
        assert!(body["details"]["tag_id"].is_string());
    }

    for form in ["tag_id=abc&code=x", "code=x"] {
        let res = send(&app, post_form("/activate", form, None)).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{form}");
        assert_eq!(json(res).await["code"], 6401);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_activate_accepts_camel_case_tag_id(pool: PgPool) {
    let pilot = common::seed(&pool).await;
    let app = app(pool);
    let tag_id = pilot.tag.id;

    let res = send(
        &app,
        post_form(
            "/activate",
            &format!("tagId={tag_id}&code={}", pilot.employees[0].scan_code),
            None,
        ),
    )
    .await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        res.headers()[header::LOCATION],
        format!("/t/{tag_id}/in").as_str()
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_setup_conflicts_are_ignored(pool: PgPool) {
    let app = app(pool);

    // No company yet: employee step is a no-op
    let body = json(send(&app, post_form("/setup/employees", "display_name=Early", None)).await).await;
    assert_eq!(body["data"]["employees"].as_array().unwrap().len(), 0);

    send(&app, post_form("/setup/company", "name=ACME", None)).await;
    let body = json(send(&app, post_form("/setup/company", "name=Other", None)).await).await;
    assert_eq!(body["data"]["company"]["name"], "ACME");

    let body = json(send(&app, post_form("/setup/company", "name=+++", None)).await).await;
    assert_eq!(body["data"]["company"]["name"], "ACME");

    let body = json(send(&app, post_form("/setup/reset", "", None)).await).await;
    assert!(body["data"]["company"].is_null());
    assert_eq!(body["data"]["company_ok"], false);

    let body = json(send(&app, get("/admin", None)).await).await;
    assert_eq!(body["code"], 3001);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_tags_lists_qr_urls(pool: PgPool) {
    let pilot = common::seed(&pool).await;
    let app = app(pool);

    let request = http::Request::get("/tags")
        .header(header::HOST, "clock.local:3000")
        .body(axum::body::Body::empty())
        .unwrap();
    let body = json(send(&app, request).await).await;
    let tag = &body["data"][0];
    assert_eq!(tag["tag_id"], pilot.tag.id);
    assert_eq!(
        tag["in_url"],
        format!("http://clock.local:3000/t/{}/in", pilot.tag.id)
    );
    assert_eq!(
        tag["out_url"],
        format!("http://clock.local:3000/t/{}/out", pilot.tag.id)
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_health(pool: PgPool) {
    let res = send(&app(pool), get("/health", None)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json(res).await["status"], "ok");
}
