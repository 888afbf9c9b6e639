mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use common::{setup_test_app, test_jwt_config};
use schoolhouse::router::init_router;
use schoolhouse::schoolhouse_config::CorsConfig;
use schoolhouse::state::AppState;

async fn get(app: &Router, uri: &str) -> axum::response::Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn assert_security_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
}

#[tokio::test]
async fn test_security_headers_on_success() {
    let (app, _) = setup_test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_security_headers(response.headers());
}

#[tokio::test]
async fn test_security_headers_on_errors() {
    let (app, _) = setup_test_app();

    let response = get(&app, "/api/classrooms").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_security_headers(response.headers());

    let response = get(&app, "/api/schools/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_security_headers(response.headers());
}

#[tokio::test]
async fn test_allowed_origin_is_echoed() {
    let (app, _) = setup_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_wildcard_origin_is_ignored() {
    assert!(CorsConfig::parse("*").is_err());

    let cors = CorsConfig {
        allowed_origins: vec!["*".to_string(), "http://app.test".to_string()],
    };
    let app = init_router(AppState::in_memory(test_jwt_config(), cors));

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
}
