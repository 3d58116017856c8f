//! Catalog storage contract and its in-memory implementation.

use std::collections::HashMap;
use std::sync::RwLock;

use ecommerce_core::{Entity, Id, RepositoryError};

use crate::product::Product;

/// Storage abstraction for catalog products.
///
/// Implementations must not apply business rules; they only load and store.
pub trait ProductRepository: Send + Sync {
    /// Load a product by id. `Ok(None)` when it does not exist.
    fn load(&self, id: &Id) -> Result<Option<Product>, RepositoryError>;

    /// Insert or replace a product.
    fn save(&self, product: &Product) -> Result<(), RepositoryError>;
}

/// In-memory product catalog.
///
/// Intended for tests/dev. Last write wins.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<Id, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products
            .into_iter()
            .map(|p| (p.id().clone(), p))
            .collect();
        Self {
            products: RwLock::new(products),
        }
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn load(&self, id: &Id) -> Result<Option<Product>, RepositoryError> {
        let products = self
            .products
            .read()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        Ok(products.get(id).cloned())
    }

    fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| RepositoryError::Unavailable("lock poisoned".to_string()))?;
        products.insert(product.id().clone(), product.clone());
        Ok(())
    }
}
