mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{
    generate_unique_email, get_auth_token, login, mint_token, register, send, setup_test_app,
};
use schoolhouse::schoolhouse_auth::Role;

#[tokio::test]
async fn test_register_and_login() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Admin",
            "email": email,
            "password": "testpass123",
            "role": "school-admin",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "msg": "User registered successfully" }));

    let (status, body) = login(&app, &email, "testpass123").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["role"], "school-admin");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();

    assert_eq!(
        register(&app, &email, "testpass123", Role::SchoolAdmin).await,
        StatusCode::CREATED
    );

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Other",
            "email": email.to_uppercase(),
            "password": "testpass123",
            "role": "superadmin",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn test_register_validation() {
    let (app, _) = setup_test_app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Admin",
            "email": generate_unique_email(),
            "password": "short",
            "role": "school-admin",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("password"));

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "name": "Admin", "password": "testpass123", "role": "school-admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email is required");
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let (app, _) = setup_test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Teacher",
            "email": generate_unique_email(),
            "password": "testpass123",
            "role": "teacher",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let (app, _) = setup_test_app();
    let email = generate_unique_email();
    register(&app, &email, "testpass123", Role::SchoolAdmin).await;

    let (status, body) = login(&app, &email, "wrongpassword").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = login(&app, &generate_unique_email(), "testpass123").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_me_returns_token_identity() {
    let (app, _) = setup_test_app();
    let token = get_auth_token(&app, Role::SuperAdmin).await;

    let (status, body) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "superadmin");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (app, _) = setup_test_app();

    for (method, uri) in [
        ("GET", "/api/auth/me"),
        ("POST", "/api/schools"),
        ("GET", "/api/classrooms"),
        ("POST", "/api/classrooms"),
        ("GET", "/api/students"),
        ("DELETE", "/api/students/00000000-0000-0000-0000-000000000000"),
    ] {
        let (status, body) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
        assert_eq!(body["error"], "Access denied. No token provided.");
    }
}

#[tokio::test]
async fn test_invalid_token_is_bad_request() {
    let (app, _) = setup_test_app();

    let (status, body) = send(&app, "GET", "/api/classrooms", Some("not-a-jwt"), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid token");

    // Signed with a different secret
    let foreign = schoolhouse::schoolhouse_auth::create_access_token(
        uuid::Uuid::new_v4(),
        "x@example.com",
        Role::SuperAdmin,
        &schoolhouse::schoolhouse_config::JwtConfig {
            secret: "some-other-secret-entirely".to_string(),
            access_token_expiry: 3600,
        },
    )
    .unwrap();
    let (status, _) = send(&app, "GET", "/api/classrooms", Some(&foreign), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_expired_token_is_bad_request() {
    let (app, _) = setup_test_app();
    let expired = schoolhouse::schoolhouse_auth::create_access_token(
        uuid::Uuid::new_v4(),
        "x@example.com",
        Role::SchoolAdmin,
        &schoolhouse::schoolhouse_config::JwtConfig {
            access_token_expiry: -3600,
            ..common::test_jwt_config()
        },
    )
    .unwrap();

    let (status, body) = send(&app, "GET", "/api/students", Some(&expired), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn test_minted_token_is_accepted() {
    let (app, _) = setup_test_app();
    let token = mint_token(Role::SchoolAdmin);

    let (status, body) = send(&app, "GET", "/api/classrooms", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_health() {
    let (app, _) = setup_test_app();
    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
