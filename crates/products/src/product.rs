use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecommerce_core::{DomainError, DomainResult, Entity, Id, Money};

use crate::snapshot::ProductData;

/// Product category. Tax policies key their rates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Drug,
    Food,
    Standard,
}

impl ProductType {
    pub const ALL: [ProductType; 3] = [ProductType::Drug, ProductType::Food, ProductType::Standard];
}

impl core::fmt::Display for ProductType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ProductType::Drug => "drug",
            ProductType::Food => "food",
            ProductType::Standard => "standard",
        };
        f.write_str(s)
    }
}

/// Catalog entity: Product.
///
/// Live catalog state. Anything that must outlive a price change takes a
/// [`ProductData`] snapshot instead of holding on to the product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: Id,
    price: Money,
    name: String,
    product_type: ProductType,
    available: bool,
}

impl Product {
    pub fn new(
        id: Id,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if price.is_negative() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self {
            id,
            price,
            name,
            product_type,
            available: true,
        })
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product_type(&self) -> ProductType {
        self.product_type
    }

    /// Whether the product may still be reserved.
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn mark_unavailable(&mut self) {
        self.available = false;
    }

    pub fn change_price(&mut self, price: Money) -> DomainResult<()> {
        if price.is_negative() {
            return Err(DomainError::validation("price cannot be negative"));
        }
        self.price = price;
        Ok(())
    }

    /// Snapshot of the current catalog state, stamped with the current time.
    pub fn generate_snapshot(&self) -> ProductData {
        self.snapshot_at(Utc::now())
    }

    /// Snapshot stamped with an explicit time (deterministic in tests).
    pub fn snapshot_at(&self, snapshot_date: DateTime<Utc>) -> ProductData {
        ProductData::new(
            self.id.clone(),
            self.price,
            self.name.clone(),
            self.product_type,
            snapshot_date,
        )
    }
}

impl Entity for Product {
    fn id(&self) -> &Id {
        &self.id
    }
}
