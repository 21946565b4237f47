//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the
//! core concepts of the bookmarks service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account
//! - [`Bookmark`] - A saved URL owned by a user
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewUser`, `NewBookmark` - For creating new records
//! - `BookmarkChanges` - For edits to an existing bookmark

pub mod bookmark;
pub mod user;

pub use bookmark::{Bookmark, BookmarkChanges, NewBookmark};
pub use user::{NewUser, User};
