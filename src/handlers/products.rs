//! Product HTTP handlers.
//!
//! This module implements the product API endpoints:
//! - GET /api/products - List with category filter, name search and pagination
//! - GET /api/products/{id} - Get product by ID
//! - POST /api/products - Create product (API key required)
//! - PUT /api/products/{id} - Update product (API key required)
//! - DELETE /api/products/{id} - Delete product (API key required)

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppError,
    extract::ValidatedProduct,
    models::product::{DeleteResponse, Product, ProductList},
    services::product_service::{self, ListQuery},
};

/// List products.
///
/// # Query Parameters
///
/// - `category` - case-insensitive exact match on category
/// - `search` - case-insensitive substring match on name
/// - `page` - 1-based page number, defaults to 1
/// - `limit` - page size, defaults to 5
///
/// # Response
///
/// - **Success (200 OK)**: filtered page plus the pre-pagination count
/// - **Error (400)**: `page` or `limit` is not an integer, or the query
///   string can't be decoded (e.g. a repeated `category`)
///
/// ```json
/// {
///   "total": 2,
///   "page": 1,
///   "limit": 5,
///   "data": [ { "id": "1", "name": "Laptop", "...": "..." } ]
/// }
/// ```
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<ProductList>, AppError> {
    let Query(query) =
        query.map_err(|rejection| AppError::InvalidRequest(rejection.body_text()))?;

    let list = product_service::list_products(&state.store, &query).await?;

    Ok(Json(list))
}

/// Get a single product by ID.
///
/// # Response
///
/// - **Success (200 OK)**: the product
/// - **Error (404)**: no product with that id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .store
        .find(&id)
        .await
        .ok_or(AppError::ProductNotFound)?;

    Ok(Json(product))
}

/// Create a new product.
///
/// # Authentication
///
/// Requires `x-api-key` header matching the configured secret.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Kettle",
///   "description": "Electric kettle",
///   "price": 25,
///   "category": "kitchen",
///   "inStock": true
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the stored product with its generated id
/// - **Error (401)**: invalid API key
/// - **Error (400)**: missing or invalid fields
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedProduct(input): ValidatedProduct,
) -> Result<impl IntoResponse, AppError> {
    let product = state.store.insert(Product::new(input)).await;

    tracing::info!(product_id = %product.id, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace the fields of an existing product.
///
/// All five fields are required, the same as on create. The id in the path
/// is kept; an `id` in the body is ignored.
///
/// # Response
///
/// - **Success (200 OK)**: the updated product
/// - **Error (401)**: invalid API key
/// - **Error (400)**: missing or invalid fields
/// - **Error (404)**: no product with that id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedProduct(input): ValidatedProduct,
) -> Result<Json<Product>, AppError> {
    let product = state
        .store
        .update(&id, input)
        .await
        .ok_or(AppError::ProductNotFound)?;

    tracing::info!(product_id = %product.id, "Updated product");

    Ok(Json(product))
}

/// Delete a product.
///
/// # Response
///
/// - **Success (200 OK)**:
///
/// ```json
/// {
///   "message": "Product deleted successfully",
///   "deleted": [ { "id": "3", "...": "..." } ]
/// }
/// ```
///
/// - **Error (401)**: invalid API key
/// - **Error (404)**: no product with that id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let product = state
        .store
        .remove(&id)
        .await
        .ok_or(AppError::ProductNotFound)?;

    tracing::info!(product_id = %product.id, "Deleted product");

    Ok(Json(DeleteResponse::new(product)))
}
