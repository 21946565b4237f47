//! Bookmark entity representing a saved URL.

use chrono::{DateTime, Utc};

/// A saved URL owned by a user.
///
/// `short_code` is the public handle used by the redirect endpoint; `visits`
/// counts how many times that redirect has been followed.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Bookmark {
    pub id: i64,
    pub user_id: i64,
    pub url: String,
    pub body: String,
    pub short_code: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Creates a new Bookmark instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        user_id: i64,
        url: String,
        body: String,
        short_code: String,
        visits: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            url,
            body,
            short_code,
            visits,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new bookmark.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub user_id: i64,
    pub url: String,
    pub body: String,
    pub short_code: String,
}

/// Replacement values for editing an existing bookmark.
///
/// Edits replace both fields; callers resolve omitted request fields before
/// building this.
#[derive(Debug, Clone)]
pub struct BookmarkChanges {
    pub url: String,
    pub body: String,
}
