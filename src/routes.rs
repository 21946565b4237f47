//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /{short_code}` - Short link redirect with visit counting (public)
//! - `GET /health`       - Health check (public)
//! - `/api/v1/auth/*`    - Registration, login, tokens, profile
//! - `/api/v1/bookmarks/*` - Bookmark CRUD and statistics (access token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - JWT bearer tokens, split into access and refresh guards
//!
//! Unmatched paths produce the same JSON error body as the handlers.

use axum::routing::get;
use axum::{middleware, Router};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::error::AppError;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = Router::new()
        .merge(api::routes::public_routes())
        .merge(
            api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_access,
            )),
        )
        .merge(
            api::routes::refresh_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::require_refresh,
            )),
        );

    Router::new()
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
        .nest("/api/v1", api_router)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

async fn not_found_handler() -> AppError {
    AppError::not_found("Not found")
}
