mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test]
async fn test_register_success(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "crycetruly",
            "email": "crycetruly@example.com",
            "password": "password123",
        }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(
        body["user"],
        json!({
            "username": "crycetruly",
            "email": "crycetruly@example.com",
        })
    );
}

#[sqlx::test]
async fn test_register_short_password(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "crycetruly",
            "email": "crycetruly@example.com",
            "password": "abc",
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Password is too short"
    );
}

#[sqlx::test]
async fn test_register_password_checked_first(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    // Every field is invalid; the password failure must win.
    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "x!",
            "email": "not-an-email",
            "password": "a",
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Password is too short"
    );
}

#[sqlx::test]
async fn test_register_short_username(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "ab",
            "email": "ab@example.com",
            "password": "password123",
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Username is too short"
    );
}

#[sqlx::test]
async fn test_register_username_not_alphanumeric(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "cryce truly",
            "email": "cryce@example.com",
            "password": "password123",
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Username must be alphanumeric with no spaces"
    );
}

#[sqlx::test]
async fn test_register_invalid_email(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "crycetruly",
            "email": "not-an-email",
            "password": "password123",
        }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Email is not valid"
    );
}

#[sqlx::test]
async fn test_register_missing_fields(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.post("/api/v1/auth/register").json(&json!({})).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Password is too short"
    );
}

#[sqlx::test]
async fn test_register_duplicate_email(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    common::register_and_login(&server, "original").await;

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "different",
            "email": "original@example.com",
            "password": "password123",
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Email already exists"
    );
}

#[sqlx::test]
async fn test_register_duplicate_username(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    common::register_and_login(&server, "original").await;

    let response = server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": "original",
            "email": "somebody.else@example.com",
            "password": "password123",
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Username already exists"
    );
}

#[sqlx::test]
async fn test_register_malformed_json(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/v1/auth/register")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());

    // A request without any body is rejected the same way.
    let response = server.post("/api/v1/auth/register").await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}

#[sqlx::test]
async fn test_login_success(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    common::register_and_login(&server, "crycetruly").await;

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({
            "email": "crycetruly@example.com",
            "password": "password123",
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert!(body["access_token"].is_string());
    assert!(body["refresh_token"].is_string());
    assert_eq!(body["username"], "crycetruly");
    assert_eq!(body["email"], "crycetruly@example.com");
}

#[sqlx::test]
async fn test_login_failures_are_indistinguishable(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    common::register_and_login(&server, "crycetruly").await;

    let wrong_password = server
        .post("/api/v1/auth/login")
        .json(&json!({
            "email": "crycetruly@example.com",
            "password": "wrong-password",
        }))
        .await;
    wrong_password.assert_status(StatusCode::UNAUTHORIZED);

    let unknown_email = server
        .post("/api/v1/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "password123",
        }))
        .await;
    unknown_email.assert_status(StatusCode::UNAUTHORIZED);

    let wrong_password_body = wrong_password.json::<serde_json::Value>();
    let unknown_email_body = unknown_email.json::<serde_json::Value>();

    assert_eq!(wrong_password_body, unknown_email_body);
    assert_eq!(wrong_password_body["error"], "Wrong credentials");
}

#[sqlx::test]
async fn test_login_missing_fields(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.post("/api/v1/auth/login").json(&json!({})).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Wrong credentials"
    );
}

#[sqlx::test]
async fn test_me_returns_profile(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    let (access, _) = common::register_and_login(&server, "crycetruly").await;

    let response = server
        .get("/api/v1/auth/me")
        .authorization_bearer(&access)
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "username": "crycetruly",
            "email": "crycetruly@example.com",
        })
    );
}

#[sqlx::test]
async fn test_me_requires_token(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/v1/auth/me").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Missing Authorization Header"
    );
}

#[sqlx::test]
async fn test_me_rejects_refresh_token(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    let (_, refresh) = common::register_and_login(&server, "crycetruly").await;

    let response = server
        .get("/api/v1/auth/me")
        .authorization_bearer(&refresh)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Only access tokens are allowed"
    );
}

#[sqlx::test]
async fn test_me_rejects_garbage_token(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .get("/api/v1/auth/me")
        .authorization_bearer("not-a-jwt")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Invalid token"
    );
}

#[sqlx::test]
async fn test_refresh_returns_new_access_token(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    let (_, refresh) = common::register_and_login(&server, "crycetruly").await;

    let response = server
        .get("/api/v1/auth/token/refresh")
        .authorization_bearer(&refresh)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let access = body["access"].as_str().unwrap();

    // The minted token works as an access token.
    server
        .get("/api/v1/auth/me")
        .authorization_bearer(access)
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_refresh_rejects_access_token(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    let (access, _) = common::register_and_login(&server, "crycetruly").await;

    let response = server
        .get("/api/v1/auth/token/refresh")
        .authorization_bearer(&access)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Only refresh tokens are allowed"
    );
}

#[sqlx::test]
async fn test_verify_token_accepts_both_kinds(pool: SqlitePool) {
    let server = common::create_test_server(pool);
    let (access, refresh) = common::register_and_login(&server, "crycetruly").await;

    for token in [&access, &refresh] {
        let response = server
            .get("/api/v1/auth/verifyToken")
            .add_header("Token", token.as_str())
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>(), json!({"success": true}));
    }
}

#[sqlx::test]
async fn test_verify_token_missing_header(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/v1/auth/verifyToken").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"success": false})
    );
}

#[sqlx::test]
async fn test_verify_token_rejects_garbage(pool: SqlitePool) {
    let server = common::create_test_server(pool);

    let response = server
        .get("/api/v1/auth/verifyToken")
        .add_header("Token", "not-a-jwt")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({"success": false})
    );
}
