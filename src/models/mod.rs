//! Data models and API request/response types.

/// Product record and request/response bodies
pub mod product;
