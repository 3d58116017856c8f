//! Immutable point-in-time product snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecommerce_core::{DomainError, DomainResult, Id, Money, ValueObject};

use crate::product::ProductType;

/// Snapshot of a catalog product taken when it was reserved or requested.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductData {
    product_id: Id,
    price: Money,
    name: String,
    product_type: ProductType,
    snapshot_date: DateTime<Utc>,
}

impl ProductData {
    pub fn new(
        product_id: Id,
        price: Money,
        name: impl Into<String>,
        product_type: ProductType,
        snapshot_date: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            price,
            name: name.into(),
            product_type,
            snapshot_date,
        }
    }

    pub fn builder() -> ProductDataBuilder {
        ProductDataBuilder::default()
    }

    pub fn product_id(&self) -> &Id {
        &self.product_id
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

    pub fn snapshot_date(&self) -> DateTime<Utc> {
        self.snapshot_date
    }
}

impl ValueObject for ProductData {}

/// Fluent builder for [`ProductData`]; every field is required.
#[derive(Debug, Clone, Default)]
pub struct ProductDataBuilder {
    product_id: Option<Id>,
    price: Option<Money>,
    name: Option<String>,
    product_type: Option<ProductType>,
    snapshot_date: Option<DateTime<Utc>>,
}

impl ProductDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn product_id(mut self, product_id: Id) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn product_type(mut self, product_type: ProductType) -> Self {
        self.product_type = Some(product_type);
        self
    }

    pub fn snapshot_date(mut self, snapshot_date: DateTime<Utc>) -> Self {
        self.snapshot_date = Some(snapshot_date);
        self
    }

    pub fn build(self) -> DomainResult<ProductData> {
        Ok(ProductData {
            product_id: required(self.product_id, "product_id")?,
            price: required(self.price, "price")?,
            name: required(self.name, "name")?,
            product_type: required(self.product_type, "product_type")?,
            snapshot_date: required(self.snapshot_date, "snapshot_date")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::validation(format!("product data is missing {field}")))
}
