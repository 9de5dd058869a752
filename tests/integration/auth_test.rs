use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn me_without_token_is_unauthorized() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"]["kind"], "AUTHENTICATION");
    assert_eq!(
        response.body["error"]["message"],
        "Missing Authorization header"
    );
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let app = TestApp::new();
    let response = app
        .request("GET", "/api/alerts", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["message"], "Invalid token");
}

#[tokio::test]
async fn every_user_route_requires_a_token() {
    let app = TestApp::new();
    for (method, uri) in [
        ("GET", "/api/weather/dashboard"),
        ("GET", "/api/searches"),
        ("DELETE", "/api/searches"),
        ("GET", "/api/locations"),
        ("GET", "/api/settings"),
        ("GET", "/api/admin/stats"),
    ] {
        let response = app.request(method, uri, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn register_rejects_short_username_before_storage() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "username": "al", "password": "long-enough-password" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"]["kind"], "VALIDATION");
    assert_eq!(
        response.body["error"]["message"],
        "username: Username must be 3 to 50 characters"
    );
}

#[tokio::test]
async fn login_requires_both_fields() {
    let app = TestApp::new();
    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "", "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
