use serde::{Deserialize, Serialize};

use ecommerce_core::Id;

/// Command: reserve `quantity` units of a product in an open reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProductCommand {
    pub order_id: Id,
    pub product_id: Id,
    pub quantity: u32,
}

impl AddProductCommand {
    pub fn new(order_id: Id, product_id: Id, quantity: u32) -> Self {
        Self {
            order_id,
            product_id,
            quantity,
        }
    }
}

/// Command: close a reservation and issue its invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueInvoiceCommand {
    pub order_id: Id,
}

impl IssueInvoiceCommand {
    pub fn new(order_id: Id) -> Self {
        Self { order_id }
    }
}
