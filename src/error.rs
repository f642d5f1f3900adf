//! Error types and HTTP error response handling.
//!
//! Every failure in the service ends up here. Each variant maps to one HTTP
//! status code and is rendered as a uniform JSON body:
//!
//! ```json
//! { "error": "Product not found" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Authentication Errors**: missing or wrong `x-api-key`
/// - **Validation Errors**: product body or query parameters are invalid
/// - **Resource Errors**: requested product or route does not exist
/// - **Internal Errors**: anything unexpected (including handler panics)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// API key is missing or does not match the configured secret.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized: Invalid or missing API key")]
    Unauthorized,

    /// Product body is missing a field, has an empty string, or a wrong type.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Missing or invalid product fields")]
    InvalidProduct,

    /// Request is malformed in some other way (bad JSON, bad pagination).
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),

    /// No product with the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Product not found")]
    ProductNotFound,

    /// No route matched the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// Unexpected failure. The detail is logged but never sent to the client.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidProduct | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::ProductNotFound | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    fn public_message(&self) -> String {
        match self {
            AppError::Internal(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// Handlers and middleware return `Result<T, AppError>` and axum calls this
/// to build the response. The error is logged as a side effect: server
/// errors at `error` level, client errors at `warn` level.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Error: {}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "Error: {}", self);
        }

        let body = Json(json!({ "error": self.public_message() }));

        (status, body).into_response()
    }
}
