//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{AccountService, BookmarkService, TokenService};
use crate::infrastructure::persistence::{SqliteBookmarkRepository, SqliteUserRepository};

/// Handles to the services and the database pool, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SqlitePool>,
    pub account_service: Arc<AccountService<SqliteUserRepository>>,
    pub bookmark_service: Arc<BookmarkService<SqliteBookmarkRepository>>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// Wires repositories and services around a connected pool.
    pub fn new(pool: SqlitePool, token_service: TokenService) -> Self {
        let db = Arc::new(pool);

        let user_repository = Arc::new(SqliteUserRepository::new(db.clone()));
        let bookmark_repository = Arc::new(SqliteBookmarkRepository::new(db.clone()));

        Self {
            db,
            account_service: Arc::new(AccountService::new(user_repository)),
            bookmark_service: Arc::new(BookmarkService::new(bookmark_repository)),
            token_service: Arc::new(token_service),
        }
    }
}
