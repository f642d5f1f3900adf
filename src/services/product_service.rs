//! Product service - query logic for listing and stats.
//!
//! This service handles:
//! - Category filtering and name search
//! - Pagination parameter parsing and slicing
//! - Per-category counts
//!
//! Everything here works on a snapshot of the store, so no lock is held
//! while filtering.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::{
    error::AppError,
    models::product::{Product, ProductList},
    store::ProductStore,
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 5;

/// Raw query string of `GET /api/products`.
///
/// `page` and `limit` are kept as strings so that bad values produce our own
/// 400 response instead of the framework's query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Parsed pagination window, echoed back in the response as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// `(start, len)` of the slice to return.
    ///
    /// A zero or negative `page` or `limit` selects nothing.
    pub fn window(&self) -> Option<(usize, usize)> {
        if self.page < 1 || self.limit < 1 {
            return None;
        }
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        let skipped = usize::try_from(self.page - 1).unwrap_or(usize::MAX);

        Some((skipped.saturating_mul(limit), limit))
    }
}

impl ListQuery {
    /// Parse `page` and `limit`.
    ///
    /// Absent or empty values fall back to the defaults. Non-numeric values
    /// are rejected; numeric values of any sign are accepted.
    pub fn pagination(&self) -> Result<Pagination, AppError> {
        Ok(Pagination {
            page: parse_integer(self.page.as_deref(), DEFAULT_PAGE)?,
            limit: parse_integer(self.limit.as_deref(), DEFAULT_LIMIT)?,
        })
    }

    fn category(&self) -> Option<&str> {
        non_empty(self.category.as_deref())
    }

    fn search(&self) -> Option<&str> {
        non_empty(self.search.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_integer(value: Option<&str>, default: i64) -> Result<i64, AppError> {
    match non_empty(value.map(str::trim)) {
        None => Ok(default),
        Some(raw) => raw.parse::<i64>().map_err(|_| {
            AppError::InvalidRequest("page and limit must be integers".to_string())
        }),
    }
}

/// Apply category filter, then name search, then pagination.
///
/// `total` in the result is the filtered count before pagination.
pub fn filter_products(
    products: Vec<Product>,
    query: &ListQuery,
) -> Result<ProductList, AppError> {
    let pagination = query.pagination()?;

    let mut results = products;

    if let Some(category) = query.category() {
        let category = category.to_lowercase();
        results.retain(|p| p.category.to_lowercase() == category);
    }

    if let Some(search) = query.search() {
        let search = search.to_lowercase();
        results.retain(|p| p.name.to_lowercase().contains(&search));
    }

    let total = results.len();
    let data = match pagination.window() {
        Some((start, len)) => results.into_iter().skip(start).take(len).collect(),
        None => Vec::new(),
    };

    Ok(ProductList {
        total,
        page: pagination.page,
        limit: pagination.limit,
        data,
    })
}

/// List products from the store.
pub async fn list_products(
    store: &ProductStore,
    query: &ListQuery,
) -> Result<ProductList, AppError> {
    let products = store.snapshot().await;
    let list = filter_products(products, query)?;

    tracing::debug!(
        total = list.total,
        returned = list.data.len(),
        page = list.page,
        limit = list.limit,
        "Listed products"
    );

    Ok(list)
}

/// Count products per category name (exact, case-sensitive keys).
pub fn category_counts(products: &[Product]) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for product in products {
        *stats.entry(product.category.clone()).or_insert(0) += 1;
    }
    stats
}

/// Category counts over the whole store.
pub async fn product_stats(store: &ProductStore) -> BTreeMap<String, usize> {
    category_counts(&store.snapshot().await)
}
