//! Product data models and API request/response types.
//!
//! This module defines:
//! - `Product`: the stored record
//! - `ProductInput`: the validated body of create and update requests
//! - `ProductList`, `DeleteResponse`: response bodies

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product record held in the store.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "1",
///   "name": "Laptop",
///   "description": "High-performance laptop with 16GB RAM",
///   "price": 1200.0,
///   "category": "electronics",
///   "inStock": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier, never changed after creation
    pub id: String,

    pub name: String,

    pub description: String,

    /// Price as sent by the client. Zero and negative values are accepted.
    pub price: f64,

    /// Category name, matched case-insensitively by the list filter
    pub category: String,

    pub in_stock: bool,
}

impl Product {
    /// Create a record from a validated body with a fresh UUID v4 id.
    ///
    /// Any `id` the client put in the body has already been dropped by
    /// deserialization, so the generated one always wins.
    pub fn new(input: ProductInput) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    pub fn with_id(id: impl Into<String>, input: ProductInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Merge an update body over this record. The id is left untouched.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.category = input.category;
        self.in_stock = input.in_stock;
    }
}

/// Body of `POST /api/products` and `PUT /api/products/{id}`.
///
/// All five fields are required on both routes. Unknown keys, including
/// `id`, are ignored.
///
/// # Validation
///
/// - `name`, `description`, `category`: non-empty strings
/// - `price`: a JSON number (not `null`)
/// - `inStock`: a JSON boolean (no coercion from strings or numbers)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductInput {
    /// Checks that can't be expressed by the field types alone.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty() && !self.category.is_empty()
    }
}

/// Response body for `GET /api/products`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductList {
    /// Number of products matching the filters, before pagination
    pub total: usize,

    pub page: i64,

    pub limit: i64,

    pub data: Vec<Product>,
}

/// Response body for `DELETE /api/products/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,

    /// Always exactly one record, the one removed
    pub deleted: Vec<Product>,
}

impl DeleteResponse {
    pub fn new(product: Product) -> Self {
        Self {
            message: "Product deleted successfully".to_string(),
            deleted: vec![product],
        }
    }
}
