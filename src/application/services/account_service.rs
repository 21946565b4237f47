//! Account registration, login, and profile service.

use std::sync::Arc;

use validator::ValidateEmail;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

const MIN_PASSWORD_LENGTH: usize = 6;
const MIN_USERNAME_LENGTH: usize = 3;

/// Message used for every failed login, whatever the cause.
const WRONG_CREDENTIALS: &str = "Wrong credentials";

/// Service for account registration and credential checks.
///
/// Registration validates input in a fixed order and reports only the first
/// failure. Login never reveals whether the email or the password was wrong.
pub struct AccountService<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> AccountService<R> {
    /// Creates a new account service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }

    /// Registers a new account.
    ///
    /// Checks run in order: password length, username length, username
    /// characters, email format, then uniqueness of email and username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for the first failed input check and
    /// [`AppError::Conflict`] when the email or username is already taken.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request("Password is too short"));
        }

        if username.len() < MIN_USERNAME_LENGTH {
            return Err(AppError::bad_request("Username is too short"));
        }

        if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(AppError::bad_request(
                "Username must be alphanumeric with no spaces",
            ));
        }

        if !email.validate_email() {
            return Err(AppError::bad_request("Email is not valid"));
        }

        if self.user_repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already exists"));
        }

        if self
            .user_repository
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = hash_password(&password)?;

        self.user_repository
            .create(NewUser {
                username,
                email,
                password_hash,
            })
            .await
    }

    /// Checks credentials and returns the account on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with the same message for an
    /// unknown email and a wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(WRONG_CREDENTIALS))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthorized(WRONG_CREDENTIALS));
        }

        Ok(user)
    }

    /// Fetches the profile of an authenticated account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the account no longer exists.
    pub async fn get_profile(&self, user_id: i64) -> Result<User, AppError> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
