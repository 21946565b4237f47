//! SQLite implementation of the bookmark repository.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Bookmark, BookmarkChanges, NewBookmark};
use crate::domain::repositories::BookmarkRepository;
use crate::error::{is_unique_violation, AppError};

/// SQLite repository for bookmark storage, pagination, and visit counting.
///
/// Uses prepared statements with bound parameters for SQL injection
/// protection.
pub struct SqliteBookmarkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBookmarkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

/// Maps a failed write to the conflict the client should see.
///
/// Short code collisions are not translated; the caller picks codes that
/// were free moments earlier, so a losing race there is a server fault.
fn classify_write_error(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e, "bookmarks.url") {
        return AppError::conflict("Url already exists");
    }
    AppError::Database(e)
}

#[async_trait]
impl BookmarkRepository for SqliteBookmarkRepository {
    async fn create(&self, new_bookmark: NewBookmark) -> Result<Bookmark, AppError> {
        let now = Utc::now();

        let bookmark = sqlx::query_as::<_, Bookmark>(
            "INSERT INTO bookmarks (user_id, url, body, short_code, visits, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, 0, ?5, ?6) \
             RETURNING id, user_id, url, body, short_code, visits, created_at, updated_at",
        )
        .bind(new_bookmark.user_id)
        .bind(&new_bookmark.url)
        .bind(&new_bookmark.body)
        .bind(&new_bookmark.short_code)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(classify_write_error)?;

        Ok(bookmark)
    }

    async fn find_by_id(&self, user_id: i64, id: i64) -> Result<Option<Bookmark>, AppError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            "SELECT id, user_id, url, body, short_code, visits, created_at, updated_at \
             FROM bookmarks WHERE user_id = ?1 AND id = ?2",
        )
        .bind(user_id)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bookmark)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Bookmark>, AppError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            "SELECT id, user_id, url, body, short_code, visits, created_at, updated_at \
             FROM bookmarks WHERE url = ?1",
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bookmark)
    }

    async fn find_by_short_code(&self, code: &str) -> Result<Option<Bookmark>, AppError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            "SELECT id, user_id, url, body, short_code, visits, created_at, updated_at \
             FROM bookmarks WHERE short_code = ?1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bookmark)
    }

    async fn list(
        &self,
        user_id: i64,
        page: i64,
        per_page: i64,
    ) -> Result<Vec<Bookmark>, AppError> {
        let offset = (page - 1) * per_page;

        let bookmarks = sqlx::query_as::<_, Bookmark>(
            "SELECT id, user_id, url, body, short_code, visits, created_at, updated_at \
             FROM bookmarks WHERE user_id = ?1 \
             ORDER BY id LIMIT ?2 OFFSET ?3",
        )
        .bind(user_id)
        .bind(per_page)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(bookmarks)
    }

    async fn count(&self, user_id: i64) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM bookmarks WHERE user_id = ?1")
                .bind(user_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn list_all(&self, user_id: i64) -> Result<Vec<Bookmark>, AppError> {
        let bookmarks = sqlx::query_as::<_, Bookmark>(
            "SELECT id, user_id, url, body, short_code, visits, created_at, updated_at \
             FROM bookmarks WHERE user_id = ?1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(bookmarks)
    }

    async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: BookmarkChanges,
    ) -> Result<Option<Bookmark>, AppError> {
        let now = Utc::now();

        let bookmark = sqlx::query_as::<_, Bookmark>(
            "UPDATE bookmarks SET url = ?1, body = ?2, updated_at = ?3 \
             WHERE user_id = ?4 AND id = ?5 \
             RETURNING id, user_id, url, body, short_code, visits, created_at, updated_at",
        )
        .bind(&changes.url)
        .bind(&changes.body)
        .bind(now)
        .bind(user_id)
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(classify_write_error)?;

        Ok(bookmark)
    }

    async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE user_id = ?1 AND id = ?2")
            .bind(user_id)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment_visits(&self, code: &str) -> Result<Option<Bookmark>, AppError> {
        let bookmark = sqlx::query_as::<_, Bookmark>(
            "UPDATE bookmarks SET visits = visits + 1 WHERE short_code = ?1 \
             RETURNING id, user_id, url, body, short_code, visits, created_at, updated_at",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bookmark)
    }
}
