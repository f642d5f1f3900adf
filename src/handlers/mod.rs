//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query string)
//! 2. Reads or mutates the product store
//! 3. Returns HTTP response (JSON, status code)

/// Product CRUD endpoints
pub mod products;
/// Welcome text and unknown-route fallback
pub mod root;
/// Per-category counts
pub mod stats;
