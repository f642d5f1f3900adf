//! Product statistics endpoint.

use std::collections::BTreeMap;

use axum::{Json, extract::State};

use crate::{AppState, services::product_service};

/// Count products per category.
///
/// # Endpoint
///
/// `GET /api/products-stats`
///
/// # Response (200 OK)
///
/// ```json
/// { "electronics": 2, "kitchen": 1 }
/// ```
pub async fn product_stats(State(state): State<AppState>) -> Json<BTreeMap<String, usize>> {
    Json(product_service::product_stats(&state.store).await)
}
