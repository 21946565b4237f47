//! # Bookmarks API
//!
//! A REST backend for saving, organizing, and sharing bookmarks, built with
//! Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Database access and migrations
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Account registration and JWT authentication (access + refresh tokens)
//! - Per-user bookmark CRUD with paginated listings
//! - Short links that redirect to the bookmarked URL and count visits
//! - Visit statistics per bookmark
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export JWT_SECRET="change-me"
//! export DATABASE_URL="sqlite://bookmarks.db"  # Optional, this is the default
//!
//! # Start the service (migrations run automatically)
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccountService, BookmarkService, TokenService};
    pub use crate::domain::entities::{Bookmark, NewBookmark, NewUser, User};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
