//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! prepared statements and bound parameters.
//!
//! # Repositories
//!
//! - [`SqliteUserRepository`] - Account storage and retrieval
//! - [`SqliteBookmarkRepository`] - Bookmark storage, pagination, and visit counting

pub mod sqlite_bookmark_repository;
pub mod sqlite_user_repository;

pub use sqlite_bookmark_repository::SqliteBookmarkRepository;
pub use sqlite_user_repository::SqliteUserRepository;
