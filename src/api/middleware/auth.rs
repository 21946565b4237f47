//! Bearer token authentication middleware.

use axum::extract::{FromRequestParts, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_auth::AuthBearer;

use crate::application::services::{Claims, TokenService};
use crate::error::AppError;
use crate::state::AppState;

/// Message returned when the `Authorization` header is absent or not a
/// well-formed `Bearer <token>` value.
pub const MISSING_AUTH_HEADER: &str = "Missing Authorization Header";

/// Identity of the caller, inserted into request extensions by the
/// authentication middleware and read back by protected handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
}

/// Guards routes that require an access token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or malformed, the
/// token is expired or invalid, or the token is a refresh token.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::get};
///
/// let protected = Router::new()
///     .route("/bookmarks", get(list_bookmarks))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_access));
/// ```
pub async fn require_access(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authenticate(state, req, next, TokenService::verify_access_token).await
}

/// Guards the token refresh route, which requires a refresh token.
///
/// Returns `401 Unauthorized` for missing headers, invalid tokens, and
/// access tokens presented in place of refresh tokens.
pub async fn require_refresh(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    authenticate(state, req, next, TokenService::verify_refresh_token).await
}

async fn authenticate<F>(
    state: AppState,
    req: Request,
    next: Next,
    verify: F,
) -> Result<Response, AppError>
where
    F: FnOnce(&TokenService, &str) -> Result<Claims, AppError>,
{
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized(MISSING_AUTH_HEADER))?;

    let claims = verify(state.token_service.as_ref(), token.as_str())?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser {
        user_id: claims.sub,
    });

    Ok(next.run(req).await)
}
