//! Handler for short link redirects.

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to the bookmarked URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// The bookmark's visit counter is incremented atomically with the lookup,
/// so every redirect is counted exactly once.
///
/// # Response
///
/// `302 Found` with the destination in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found when no bookmark carries the code.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookmark = state.bookmark_service.resolve_short_code(&short_code).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, bookmark.url)]))
}
