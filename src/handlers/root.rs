//! Root route and fallback.

use crate::error::AppError;

pub const WELCOME: &str = "Welcome to the Product API! Go to /api/products to see all products.";

/// `GET /` - plain text pointer to the API.
pub async fn welcome() -> &'static str {
    WELCOME
}

/// Any request that matched no route.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
