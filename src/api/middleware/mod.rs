//! HTTP middleware for request processing and protection.
//!
//! Provides authentication guards and observability middleware.

pub mod auth;
pub mod tracing;
