//! Handlers for bookmark management endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use crate::api::dto::bookmark::{
    BookmarkListResponse, BookmarkResponse, BookmarkStatsResponse, CreateBookmarkRequest,
    UpdateBookmarkRequest,
};
use crate::api::dto::pagination::{PageMeta, PaginationParams};
use crate::api::extract::AppJson;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a bookmark for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/v1/bookmarks`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/article",
///   "body": "Long read for the weekend"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored bookmark, including its generated
/// `short_url` code and a zero visit count.
///
/// # Errors
///
/// Returns 400 Bad Request for an invalid URL and 409 Conflict when the
/// URL is already bookmarked.
pub async fn create_bookmark_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    AppJson(payload): AppJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<BookmarkResponse>), AppError> {
    let bookmark = state
        .bookmark_service
        .create_bookmark(current_user.user_id, payload.url, payload.body)
        .await?;

    Ok((StatusCode::CREATED, Json(BookmarkResponse::from(bookmark))))
}

/// Lists the user's bookmarks one page at a time.
///
/// # Endpoint
///
/// `GET /api/v1/bookmarks`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `per_page` (optional): Items per page (default: 5)
///
/// Unparseable values fall back to the defaults instead of failing the
/// request.
///
/// # Response
///
/// ```json
/// {
///   "data": [ ... ],
///   "meta": {
///     "page": 1,
///     "pages": 3,
///     "total_count": 12,
///     "prev_page": null,
///     "next_page": 2,
///     "has_next": true,
///     "has_prev": false
///   }
/// }
/// ```
pub async fn list_bookmarks_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<BookmarkListResponse>, AppError> {
    let (page, per_page) = params.resolve();

    let (bookmarks, total_count) = state
        .bookmark_service
        .list_bookmarks(current_user.user_id, page, per_page)
        .await?;

    let data = bookmarks.into_iter().map(BookmarkResponse::from).collect();

    Ok(Json(BookmarkListResponse {
        data,
        meta: PageMeta::build(page, per_page, total_count),
    }))
}

/// Fetches one bookmark by id.
///
/// # Endpoint
///
/// `GET /api/v1/bookmarks/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when the bookmark does not exist or belongs to
/// another user.
pub async fn get_bookmark_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<BookmarkResponse>, AppError> {
    let bookmark = state
        .bookmark_service
        .get_bookmark(current_user.user_id, id)
        .await?;

    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// Replaces a bookmark's url and body.
///
/// # Endpoint
///
/// `PUT /api/v1/bookmarks/{id}` and `PATCH /api/v1/bookmarks/{id}`
///
/// Both methods behave identically. Omitted fields are treated as empty
/// strings, so a PATCH without `url` fails URL validation rather than
/// keeping the old value.
///
/// # Errors
///
/// Returns 404 Not Found before any validation when the bookmark does not
/// exist, 400 Bad Request for an invalid URL, and 409 Conflict when the
/// new URL is already bookmarked elsewhere.
pub async fn update_bookmark_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<UpdateBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, AppError> {
    let bookmark = state
        .bookmark_service
        .update_bookmark(current_user.user_id, id, payload.url, payload.body)
        .await?;

    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// Deletes a bookmark.
///
/// # Endpoint
///
/// `DELETE /api/v1/bookmarks/{id}`
///
/// Returns `204 No Content` on success and 404 Not Found when the
/// bookmark does not exist or belongs to another user.
pub async fn delete_bookmark_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state
        .bookmark_service
        .delete_bookmark(current_user.user_id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reports visit counts for all of the user's short links.
///
/// # Endpoint
///
/// `GET /api/v1/bookmarks/stats`
///
/// # Response
///
/// ```json
/// {
///   "data": [
///     {
///       "id": 1,
///       "url": "https://example.com/article",
///       "short_url": "h4Fz9aQ1",
///       "visits": 4
///     }
///   ]
/// }
/// ```
pub async fn stats_handler(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<BookmarkStatsResponse>, AppError> {
    let bookmarks = state
        .bookmark_service
        .list_all_bookmarks(current_user.user_id)
        .await?;

    let data = bookmarks.into_iter().map(Into::into).collect();

    Ok(Json(BookmarkStatsResponse { data }))
}
