//! DTOs for registration, login, and token endpoints.

use serde::{Deserialize, Serialize};

/// Request to register a new account.
///
/// Fields are optional at the wire level; omitted values fall back to the
/// empty string and fail the corresponding validation check.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request to log in with email and password.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public view of an account. Never carries the id or password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
}

/// Response for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub username: String,
    pub email: String,
}

/// Response carrying a freshly minted access token.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// Response for the token introspection endpoint.
#[derive(Debug, Serialize)]
pub struct VerifyTokenResponse {
    pub success: bool,
}
