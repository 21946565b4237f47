//! Bookmark creation, retrieval, editing, and redirect resolution.

use std::sync::Arc;

use crate::domain::entities::{Bookmark, BookmarkChanges, NewBookmark};
use crate::domain::repositories::BookmarkRepository;
use crate::error::AppError;
use crate::utils::short_code::generate_code;
use crate::utils::url_validator::is_valid_url;

const BOOKMARK_NOT_FOUND: &str = "Bookmark not found";

/// Service for managing bookmarks and resolving short codes.
///
/// Every operation except [`Self::resolve_short_code`] is scoped to the
/// acting user; bookmarks owned by other users are treated as missing.
pub struct BookmarkService<R: BookmarkRepository> {
    bookmark_repository: Arc<R>,
}

impl<R: BookmarkRepository> BookmarkService<R> {
    /// Creates a new bookmark service.
    pub fn new(bookmark_repository: Arc<R>) -> Self {
        Self { bookmark_repository }
    }

    /// Creates a bookmark with a freshly generated short code.
    ///
    /// Omitted fields default to the empty string, which for `url` fails
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing or malformed URL and
    /// [`AppError::Conflict`] when any user already bookmarked it.
    pub async fn create_bookmark(
        &self,
        user_id: i64,
        url: Option<String>,
        body: Option<String>,
    ) -> Result<Bookmark, AppError> {
        let url = url.unwrap_or_default();
        let body = body.unwrap_or_default();

        if !is_valid_url(&url) {
            return Err(AppError::bad_request("Invalid url"));
        }

        if self.bookmark_repository.find_by_url(&url).await?.is_some() {
            return Err(AppError::conflict("Url already exists"));
        }

        let short_code = self.generate_unique_code().await?;

        self.bookmark_repository
            .create(NewBookmark {
                user_id,
                url,
                body,
                short_code,
            })
            .await
    }

    /// Fetches a single bookmark owned by the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when it does not exist or belongs to
    /// someone else.
    pub async fn get_bookmark(&self, user_id: i64, id: i64) -> Result<Bookmark, AppError> {
        self.bookmark_repository
            .find_by_id(user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(BOOKMARK_NOT_FOUND))
    }

    /// Lists one page of the user's bookmarks along with the total count.
    pub async fn list_bookmarks(
        &self,
        user_id: i64,
        page: i64,
        per_page: i64,
    ) -> Result<(Vec<Bookmark>, i64), AppError> {
        let bookmarks = self
            .bookmark_repository
            .list(user_id, page, per_page)
            .await?;
        let total = self.bookmark_repository.count(user_id).await?;

        Ok((bookmarks, total))
    }

    /// Lists all of the user's bookmarks for the visit statistics view.
    pub async fn list_all_bookmarks(&self, user_id: i64) -> Result<Vec<Bookmark>, AppError> {
        self.bookmark_repository.list_all(user_id).await
    }

    /// Replaces the URL and body of an existing bookmark.
    ///
    /// Existence is checked before the new values are validated, so editing
    /// a missing bookmark reports not-found even with a bad URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`], [`AppError::Validation`] for a bad
    /// URL, or [`AppError::Conflict`] when the new URL is already bookmarked.
    pub async fn update_bookmark(
        &self,
        user_id: i64,
        id: i64,
        url: Option<String>,
        body: Option<String>,
    ) -> Result<Bookmark, AppError> {
        if self
            .bookmark_repository
            .find_by_id(user_id, id)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(BOOKMARK_NOT_FOUND));
        }

        let url = url.unwrap_or_default();
        let body = body.unwrap_or_default();

        if !is_valid_url(&url) {
            return Err(AppError::bad_request("Enter a valid url"));
        }

        self.bookmark_repository
            .update(user_id, id, BookmarkChanges { url, body })
            .await?
            .ok_or_else(|| AppError::not_found(BOOKMARK_NOT_FOUND))
    }

    /// Deletes a bookmark owned by the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when nothing was deleted.
    pub async fn delete_bookmark(&self, user_id: i64, id: i64) -> Result<(), AppError> {
        let deleted = self.bookmark_repository.delete(user_id, id).await?;

        if !deleted {
            return Err(AppError::not_found(BOOKMARK_NOT_FOUND));
        }

        Ok(())
    }

    /// Resolves a short code for the redirect endpoint, counting the visit.
    ///
    /// The increment and the lookup are a single atomic statement, so
    /// concurrent visits each count exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code.
    pub async fn resolve_short_code(&self, code: &str) -> Result<Bookmark, AppError> {
        self.bookmark_repository
            .increment_visits(code)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// Generates a short code not currently in use, with collision retry.
    ///
    /// Attempts up to 10 times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let code = generate_code();

            if self
                .bookmark_repository
                .find_by_short_code(&code)
                .await?
                .is_none()
            {
                return Ok(code);
            }
        }

        Err(AppError::internal("Failed to generate a unique short code"))
    }
}
