use axum::http::StatusCode;

use skywatch_entity::user::UserRole;

use crate::helpers::TestApp;

#[tokio::test]
async fn regular_user_is_forbidden_from_admin_routes() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    for (method, uri) in [
        ("GET", "/api/admin/stats"),
        ("GET", "/api/admin/users"),
        ("GET", "/api/admin/searches"),
        ("GET", "/api/admin/jobs"),
        ("POST", "/api/admin/jobs/alert_sweep/run"),
    ] {
        let response = app.request(method, uri, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {uri}");
        assert_eq!(response.body["error"]["kind"], "AUTHORIZATION");
    }
}

#[tokio::test]
async fn admin_lists_registered_jobs() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Admin);

    let response = app.request("GET", "/api/admin/jobs", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["job_types"],
        serde_json::json!(["alert_sweep"])
    );
}

#[tokio::test]
async fn unknown_job_type_is_not_found() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Admin);

    let response = app
        .request("POST", "/api/admin/jobs/defrag/run", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["error"]["message"],
        "Unknown job type 'defrag'"
    );
}
