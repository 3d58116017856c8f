use serde::{Deserialize, Serialize};

use ecommerce_core::{ClientData, DomainError, DomainResult, Money, ValueObject};
use ecommerce_products::ProductData;

/// One requested line: product snapshot, quantity, pre-tax total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestItem {
    product_data: ProductData,
    quantity: u32,
    total_price: Money,
}

impl RequestItem {
    pub fn new(product_data: ProductData, quantity: u32, total_price: Money) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "request item quantity must be positive",
            ));
        }
        if total_price.is_negative() {
            return Err(DomainError::validation(
                "request item total price cannot be negative",
            ));
        }
        Ok(Self {
            product_data,
            quantity,
            total_price,
        })
    }

    /// Line priced from the snapshot: `price * quantity`.
    pub fn priced(product_data: ProductData, quantity: u32) -> DomainResult<Self> {
        let total_price = product_data.price().times(quantity)?;
        Self::new(product_data, quantity, total_price)
    }

    pub fn product_data(&self) -> &ProductData {
        &self.product_data
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_price(&self) -> Money {
        self.total_price
    }
}

impl ValueObject for RequestItem {}

/// Accumulates the lines a client wants invoiced.
///
/// Append-only: lines keep insertion order and identical lines are kept as
/// separate entries, never merged by quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    client: ClientData,
    items: Vec<RequestItem>,
}

impl InvoiceRequest {
    pub fn new(client: ClientData) -> Self {
        Self {
            client,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, item: RequestItem) {
        self.items.push(item);
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[RequestItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
