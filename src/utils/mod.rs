//! Utility functions shared across the application:
//!
//! - [`short_code`] - Random short code generation for bookmark links
//! - [`password`] - Argon2id password hashing and verification
//! - [`url_validator`] - URL validation for submitted bookmarks

pub mod password;
pub mod short_code;
pub mod url_validator;
