#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use schoolhouse::router::init_router;
use schoolhouse::schoolhouse_auth::{Role, create_access_token};
use schoolhouse::schoolhouse_config::{CorsConfig, JwtConfig};
use schoolhouse::state::AppState;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        access_token_expiry: 3600,
    }
}

/// Router over a fresh in-memory backend. Clones of the router share state.
pub fn setup_test_app() -> (Router, AppState) {
    let state = AppState::in_memory(test_jwt_config(), CorsConfig::default());
    (init_router(state.clone()), state)
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Token for a user that only exists in the token itself.
pub fn mint_token(role: Role) -> String {
    create_access_token(
        Uuid::new_v4(),
        &generate_unique_email(),
        role,
        &test_jwt_config(),
    )
    .unwrap()
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn register(app: &Router, email: &str, password: &str, role: Role) -> StatusCode {
    let (status, _) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Test User",
            "email": email,
            "password": password,
            "role": role,
        })),
    )
    .await;
    status
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await
}

/// Registers a fresh user with `role` and returns a token from a real login.
pub async fn get_auth_token(app: &Router, role: Role) -> String {
    let email = generate_unique_email();
    let password = "testpass123";
    assert_eq!(
        register(app, &email, password, role).await,
        StatusCode::CREATED
    );

    let (status, body) = login(app, &email, password).await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub async fn create_test_school(app: &Router, superadmin_token: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/schools",
        Some(superadmin_token),
        Some(json!({ "name": "Test School", "address": "123 Street" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

pub async fn create_test_classroom(app: &Router, admin_token: &str, school_id: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/classrooms",
        Some(admin_token),
        Some(json!({ "name": "Math Class", "capacity": 30, "school": school_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

pub async fn create_test_student(app: &Router, admin_token: &str, classroom_id: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/students",
        Some(admin_token),
        Some(json!({ "name": "John Doe", "age": 15, "classroom": classroom_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}
