use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_reports_ok_and_version() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].is_string());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", "/api/nowhere", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
