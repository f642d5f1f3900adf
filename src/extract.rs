//! Request body extractor for product writes.

use axum::{
    body::Bytes,
    extract::{FromRequest, Json, Request, rejection::JsonRejection},
    http::{HeaderMap, header::CONTENT_TYPE},
};

use crate::{error::AppError, models::product::ProductInput};

/// JSON body of a create or update request, already checked.
///
/// Runs after the auth middleware, so an unauthenticated request never
/// reaches validation.
///
/// - No body, or a body without a JSON content type → [`AppError::InvalidProduct`]
/// - Missing field, `null`, or wrong JSON type → [`AppError::InvalidProduct`]
/// - Empty `name`, `description`, or `category` → [`AppError::InvalidProduct`]
/// - Syntactically malformed JSON → [`AppError::InvalidRequest`]
#[derive(Debug)]
pub struct ValidatedProduct(pub ProductInput);

impl<S> FromRequest<S> for ValidatedProduct
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // A body we can't read as JSON carries none of the fields
        if !has_json_content_type(req.headers()) {
            return Err(AppError::InvalidProduct);
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::InvalidProduct);
        }

        let Json(input) = Json::<ProductInput>::from_bytes(&bytes).map_err(|rejection| {
            match rejection {
                JsonRejection::JsonDataError(_) => AppError::InvalidProduct,
                other => AppError::InvalidRequest(other.body_text()),
            }
        })?;

        if !input.is_valid() {
            return Err(AppError::InvalidProduct);
        }

        Ok(ValidatedProduct(input))
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
