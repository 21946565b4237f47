//! DTOs for bookmark endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::dto::pagination::PageMeta;
use crate::domain::entities::Bookmark;

/// Request to create a bookmark.
///
/// A missing `url` fails validation; a missing `body` becomes the empty
/// string.
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub url: Option<String>,
    pub body: Option<String>,
}

/// Request to edit a bookmark. Both fields are replaced, so the same
/// defaults apply as on creation.
#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkRequest {
    pub url: Option<String>,
    pub body: Option<String>,
}

/// Full bookmark record as returned by the API.
///
/// `short_url` carries the bare short code, which is also the path segment
/// of the redirect endpoint.
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub url: String,
    pub short_url: String,
    pub visits: i64,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            url: bookmark.url,
            short_url: bookmark.short_code,
            visits: bookmark.visits,
            body: bookmark.body,
            created_at: bookmark.created_at,
            updated_at: bookmark.updated_at,
        }
    }
}

/// One page of bookmarks plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct BookmarkListResponse {
    pub data: Vec<BookmarkResponse>,
    pub meta: PageMeta,
}

/// Visit count entry for the statistics endpoint.
#[derive(Debug, Serialize)]
pub struct BookmarkStatsItem {
    pub id: i64,
    pub url: String,
    pub short_url: String,
    pub visits: i64,
}

impl From<Bookmark> for BookmarkStatsItem {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id,
            url: bookmark.url,
            short_url: bookmark.short_code,
            visits: bookmark.visits,
        }
    }
}

/// Visit counts for all of the user's bookmarks.
#[derive(Debug, Serialize)]
pub struct BookmarkStatsResponse {
    pub data: Vec<BookmarkStatsItem>,
}
