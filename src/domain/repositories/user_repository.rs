//! Repository trait for account data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUserRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the email or username is already
    /// taken, with the message naming which one.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds an account by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Finds an account by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Finds an account by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
}
