//! Handlers for registration, login, and token endpoints.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::{Extension, Json};

use crate::api::dto::auth::{
    LoginRequest, LoginResponse, RefreshResponse, RegisterRequest, RegisterResponse, UserResponse,
    VerifyTokenResponse,
};
use crate::api::extract::AppJson;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the raw JWT for the introspection endpoint.
const TOKEN_HEADER: &str = "Token";

/// Registers a new user account.
///
/// # Endpoint
///
/// `POST /api/v1/auth/register`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "crycetruly",
///   "email": "crycetruly@example.com",
///   "password": "hunter22"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the public profile of the new user:
///
/// ```json
/// {
///   "message": "User created successfully",
///   "user": {
///     "username": "crycetruly",
///     "email": "crycetruly@example.com"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when a field fails validation and
/// 409 Conflict when the email or username is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = state
        .account_service
        .register(
            payload.username.unwrap_or_default(),
            payload.email.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user: UserResponse {
                username: user.username,
                email: user.email,
            },
        }),
    ))
}

/// Authenticates a user and issues a token pair.
///
/// # Endpoint
///
/// `POST /api/v1/auth/login`
///
/// # Response
///
/// ```json
/// {
///   "access_token": "<jwt>",
///   "refresh_token": "<jwt>",
///   "username": "crycetruly",
///   "email": "crycetruly@example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized with `Wrong credentials` for an unknown email
/// or a wrong password. The two cases are indistinguishable to the caller.
pub async fn login_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .account_service
        .login(
            &payload.email.unwrap_or_default(),
            &payload.password.unwrap_or_default(),
        )
        .await?;

    let access_token = state.token_service.generate_access_token(user.id)?;
    let refresh_token = state.token_service.generate_refresh_token(user.id)?;

    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        username: user.username,
        email: user.email,
    }))
}

/// Returns the authenticated user's profile.
///
/// # Endpoint
///
/// `GET /api/v1/auth/me` (access token required)
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.account_service.get_profile(current_user.user_id).await?;

    Ok(Json(UserResponse {
        username: user.username,
        email: user.email,
    }))
}

/// Issues a fresh access token from a refresh token.
///
/// # Endpoint
///
/// `GET /api/v1/auth/token/refresh` (refresh token required)
///
/// # Response
///
/// ```json
/// {
///   "access": "<jwt>"
/// }
/// ```
pub async fn refresh_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<RefreshResponse>, AppError> {
    let access = state
        .token_service
        .generate_access_token(current_user.user_id)?;

    Ok(Json(RefreshResponse { access }))
}

/// Reports whether a token is valid without authenticating the request.
///
/// # Endpoint
///
/// `GET /api/v1/auth/verifyToken`
///
/// The raw JWT is read from a `Token` header rather than `Authorization`.
/// Either token type is accepted; only the signature and expiry are
/// checked.
///
/// # Response
///
/// Always a `success` flag, never an error body: `200 {"success": true}`
/// for a live token, `401 {"success": false}` for a missing, malformed,
/// or expired one.
pub async fn verify_token_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (StatusCode, Json<VerifyTokenResponse>) {
    let token = headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok());

    let valid = match token {
        Some(token) => state.token_service.verify_token(token).is_ok(),
        None => false,
    };

    if valid {
        (StatusCode::OK, Json(VerifyTokenResponse { success: true }))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(VerifyTokenResponse { success: false }),
        )
    }
}
