//! API route configuration.
//!
//! Routes are grouped by the credential they require; the authentication
//! layers themselves are applied in [`crate::routes`].

use crate::api::handlers::{
    create_bookmark_handler, delete_bookmark_handler, get_bookmark_handler, list_bookmarks_handler,
    login_handler, me_handler, refresh_handler, register_handler, stats_handler,
    update_bookmark_handler, verify_token_handler,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Routes that are reachable without a token.
///
/// # Endpoints
///
/// - `POST /auth/register`    - Create a user account
/// - `POST /auth/login`       - Exchange credentials for a token pair
/// - `GET  /auth/verifyToken` - Check a token passed in the `Token` header
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/verifyToken", get(verify_token_handler))
}

/// Routes guarded by an access token.
///
/// # Endpoints
///
/// - `GET    /auth/me`         - Authenticated user's profile
/// - `GET    /bookmarks`       - Paginated bookmark listing
/// - `POST   /bookmarks`       - Create a bookmark
/// - `GET    /bookmarks/stats` - Visit counts for all short links
/// - `GET    /bookmarks/{id}`  - Fetch one bookmark
/// - `PUT    /bookmarks/{id}`  - Replace url and body
/// - `PATCH  /bookmarks/{id}`  - Same behavior as PUT
/// - `DELETE /bookmarks/{id}`  - Delete a bookmark
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me_handler))
        .route(
            "/bookmarks",
            get(list_bookmarks_handler).post(create_bookmark_handler),
        )
        .route("/bookmarks/stats", get(stats_handler))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark_handler)
                .put(update_bookmark_handler)
                .patch(update_bookmark_handler)
                .delete(delete_bookmark_handler),
        )
}

/// Routes guarded by a refresh token.
///
/// # Endpoints
///
/// - `GET /auth/token/refresh` - Issue a fresh access token
pub fn refresh_routes() -> Router<AppState> {
    Router::new().route("/auth/token/refresh", get(refresh_handler))
}
