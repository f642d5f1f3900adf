//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers.
//! They can:
//! - Log requests
//! - Authenticate requests
//! - Short-circuit requests (reject unauthorized)

/// Shared-secret authentication for write routes
pub mod auth;
/// Per-request access log
pub mod logger;
