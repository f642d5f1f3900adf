//! Product API
//!
//! A REST API over an in-memory product catalogue: list with filtering,
//! search and pagination, CRUD by id, and per-category stats. Write routes
//! are guarded by a shared API key.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: in-process list behind a `tokio::sync::RwLock`
//! - **Authentication**: shared secret in `x-api-key`, compared by SHA-256
//! - **Format**: JSON requests/responses
//!
//! # Request Flow
//!
//! request → logger → (auth → body validation, for writes) → handler →
//! store → response. Every error is rendered by [`error::AppError`].

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;

use std::{any::Any, sync::Arc};

use axum::{
    Router, middleware as axum_middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{error::AppError, store::ProductStore};

/// State shared with every handler and middleware.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: ProductStore,

    /// SHA-256 hex digest of the configured API key
    pub api_key_hash: Arc<str>,
}

impl AppState {
    pub fn new(store: ProductStore, api_key: &str) -> Self {
        Self {
            store,
            api_key_hash: middleware::auth::hash_api_key(api_key).into(),
        }
    }
}

/// Build the HTTP router with all routes and middleware.
///
/// The auth layer sits on every method router of the product paths, including
/// their method-not-allowed fallback: an unsupported method such as `PATCH`
/// on `/api/products/{id}` gets 401 without a valid key and 405 with one.
pub fn app(state: AppState) -> Router {
    // Write routes: API key checked before the body is parsed
    let authenticated_routes = Router::new()
        .route("/api/products", post(handlers::products::create_product))
        .route("/api/products/{id}", put(handlers::products::update_product))
        .route(
            "/api/products/{id}",
            delete(handlers::products::delete_product),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/", get(handlers::root::welcome))
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/{id}", get(handlers::products::get_product))
        .route("/api/products-stats", get(handlers::stats::product_stats))
        .merge(authenticated_routes)
        .fallback(handlers::root::not_found)
        .layer(axum_middleware::from_fn(middleware::logger::log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Turn a handler panic into the standard 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}
