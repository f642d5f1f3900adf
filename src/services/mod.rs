//! Business logic that sits between handlers and the store.

/// Listing, filtering, pagination and stats
pub mod product_service;
