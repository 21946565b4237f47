//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization.

pub mod auth;
pub mod bookmark;
pub mod health;
pub mod pagination;
