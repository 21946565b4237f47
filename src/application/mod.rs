//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Registration, login, and profiles
//! - [`services::bookmark_service::BookmarkService`] - Bookmark CRUD and redirects
//! - [`services::token_service::TokenService`] - JWT issuing and verification

pub mod services;
