#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use sqlx::SqlitePool;

use bookmarks_api::application::services::TokenService;
use bookmarks_api::routes::app_router;
use bookmarks_api::state::AppState;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    let token_service = TokenService::new("test-signing-secret", 60, 30);
    AppState::new(pool, token_service)
}

pub fn create_test_server(pool: SqlitePool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool))).unwrap()
}

/// Registers `username` and logs in, returning `(access_token, refresh_token)`.
///
/// The account uses `<username>@example.com` and the password `password123`.
pub async fn register_and_login(server: &TestServer, username: &str) -> (String, String) {
    let email = format!("{username}@example.com");

    server
        .post("/api/v1/auth/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": "password123",
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({
            "email": email,
            "password": "password123",
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    (
        body["access_token"].as_str().unwrap().to_string(),
        body["refresh_token"].as_str().unwrap().to_string(),
    )
}

/// Creates a bookmark through the API and returns the response body.
pub async fn create_bookmark(server: &TestServer, token: &str, url: &str) -> serde_json::Value {
    let response = server
        .post("/api/v1/bookmarks")
        .authorization_bearer(token)
        .json(&json!({
            "url": url,
            "body": "saved for later",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    response.json::<serde_json::Value>()
}

/// Inserts a user row directly, for repository tests that need an owner id.
pub async fn seed_user(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, email, password_hash, created_at)
         VALUES (?1, ?2, ?3, ?4)
         RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind("not-a-real-hash")
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a bookmark row directly and returns its id.
pub async fn seed_bookmark(pool: &SqlitePool, user_id: i64, url: &str, short_code: &str) -> i64 {
    let now = Utc::now();

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO bookmarks (user_id, url, body, short_code, visits, created_at, updated_at)
         VALUES (?1, ?2, '', ?3, 0, ?4, ?5)
         RETURNING id",
    )
    .bind(user_id)
    .bind(url)
    .bind(short_code)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .unwrap()
}
