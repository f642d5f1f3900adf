//! In-memory product store.
//!
//! The store is the only source of truth for products. It lives as long as
//! the process and is empty (or seeded) again after a restart.
//!
//! Handlers run on a multi-threaded runtime, so the list sits behind a
//! `tokio::sync::RwLock`. Compound operations (find then replace, find then
//! remove) hold a single write guard for their whole duration.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::product::{Product, ProductInput};

/// Shared handle to the product list. Cloning is cheap and every clone sees
/// the same data.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `products` in the given order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Create a store holding the three demo products the service starts with.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    /// Copy of every product, in insertion order.
    pub async fn snapshot(&self) -> Vec<Product> {
        self.products.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }

    pub async fn find(&self, id: &str) -> Option<Product> {
        let products = self.products.read().await;
        products.iter().find(|p| p.id == id).cloned()
    }

    /// Append a record to the end of the list.
    pub async fn insert(&self, product: Product) -> Product {
        let mut products = self.products.write().await;
        products.push(product.clone());
        product
    }

    /// Merge `input` over the record with `id` in place.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    pub async fn update(&self, id: &str, input: ProductInput) -> Option<Product> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.id == id)?;
        products[index].apply(input);
        Some(products[index].clone())
    }

    /// Remove the record with `id`, returning it.
    pub async fn remove(&self, id: &str) -> Option<Product> {
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.id == id)?;
        Some(products.remove(index))
    }
}

/// The demo catalogue: two electronics products and one kitchen product.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
        },
    ]
}
