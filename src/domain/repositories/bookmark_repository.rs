//! Repository trait for bookmark data access.

use crate::domain::entities::{Bookmark, BookmarkChanges, NewBookmark};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing bookmarks.
///
/// Read and write operations that take a `user_id` are scoped to that user;
/// a bookmark owned by someone else behaves as if it does not exist. Lookups
/// by URL and short code are global, matching the uniqueness of those
/// columns.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteBookmarkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_bookmark.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Creates a new bookmark with zero visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the URL is already bookmarked by
    /// any user.
    async fn create(&self, new_bookmark: NewBookmark) -> Result<Bookmark, AppError>;

    /// Finds a bookmark owned by `user_id` with the given id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Bookmark))` if found
    /// - `Ok(None)` if not found or owned by another user
    async fn find_by_id(&self, user_id: i64, id: i64) -> Result<Option<Bookmark>, AppError>;

    /// Finds a bookmark by its URL, regardless of owner.
    async fn find_by_url(&self, url: &str) -> Result<Option<Bookmark>, AppError>;

    /// Finds a bookmark by its short code, regardless of owner.
    async fn find_by_short_code(&self, code: &str) -> Result<Option<Bookmark>, AppError>;

    /// Lists one page of the user's bookmarks in insertion order.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `per_page` - Number of items per page
    ///
    /// A page past the end returns an empty vec.
    async fn list(&self, user_id: i64, page: i64, per_page: i64)
        -> Result<Vec<Bookmark>, AppError>;

    /// Counts the user's bookmarks.
    async fn count(&self, user_id: i64) -> Result<i64, AppError>;

    /// Lists all of the user's bookmarks without pagination.
    ///
    /// Used by the visit statistics endpoint.
    async fn list_all(&self, user_id: i64) -> Result<Vec<Bookmark>, AppError>;

    /// Replaces the URL and body of a bookmark owned by `user_id`.
    ///
    /// # Returns
    ///
    /// The updated bookmark, or `None` when no row matches `user_id` + `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the new URL is already bookmarked.
    async fn update(
        &self,
        user_id: i64,
        id: i64,
        changes: BookmarkChanges,
    ) -> Result<Option<Bookmark>, AppError>;

    /// Deletes a bookmark owned by `user_id`.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if not found.
    async fn delete(&self, user_id: i64, id: i64) -> Result<bool, AppError>;

    /// Atomically increments the visit counter for a short code.
    ///
    /// # Returns
    ///
    /// The bookmark with the incremented count, or `None` for an unknown
    /// code.
    async fn increment_visits(&self, code: &str) -> Result<Option<Bookmark>, AppError>;
}
