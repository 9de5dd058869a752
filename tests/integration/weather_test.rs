use axum::http::StatusCode;
use serde_json::json;

use skywatch_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn search_rejects_too_short_city() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/weather/search",
            Some(json!({ "city": " a " })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["error"]["message"],
        "Please enter a valid city name."
    );
}

#[tokio::test]
async fn search_rejects_digits_in_city() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/weather/search",
            Some(json!({ "city": "London 2" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["error"]["message"],
        "City name contains invalid characters."
    );
}

#[tokio::test]
async fn alert_without_city_is_rejected() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/alerts",
            Some(json!({ "city": "", "condition_alerts": true })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"]["message"], "city: City is required.");
}
