//! API key authentication middleware.
//!
//! This middleware guards the write routes (create, update, delete):
//! 1. Extract the API key from the `x-api-key` header
//! 2. Hash it and compare with the hash of the configured secret
//! 3. Reject missing or wrong keys with HTTP 401 before the body is read

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};

use crate::{AppState, error::AppError};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Hex-encoded SHA-256 of an API key.
///
/// The configured secret is hashed once at startup; presented keys are hashed
/// per request and the two digests compared, so the comparison always covers
/// fixed-length values.
pub fn hash_api_key(key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());

    hex::encode(hasher.finalize())
}

/// API key authentication middleware function.
///
/// # Flow
///
/// 1. Extract `x-api-key` header from request
/// 2. Hash the key using SHA-256
/// 3. If it matches the configured key hash: call next handler
/// 4. Otherwise: return 401 Unauthorized error
///
/// # Headers
///
/// ```text
/// x-api-key: mysecretkey
/// ```
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    if hash_api_key(api_key) != *state.api_key_hash {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
