use serde::{Deserialize, Serialize};

use ecommerce_core::{ClientData, DomainResult, Id, Money};

use crate::request::RequestItem;
use crate::tax::Tax;

/// A requested line together with the tax computed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    item: RequestItem,
    tax: Tax,
}

impl InvoiceLine {
    pub fn new(item: RequestItem, tax: Tax) -> Self {
        Self { item, tax }
    }

    pub fn item(&self) -> &RequestItem {
        &self.item
    }

    pub fn tax(&self) -> &Tax {
        &self.tax
    }

    /// Pre-tax amount of the line.
    pub fn net(&self) -> Money {
        self.item.total_price()
    }

    pub fn gross(&self) -> DomainResult<Money> {
        self.net().checked_add(&self.tax.amount())
    }
}

/// Issued invoice: client + taxed lines in request order.
///
/// Only [`crate::InvoiceFactory`] appends lines; callers get read access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: Id,
    client: ClientData,
    items: Vec<InvoiceLine>,
}

impl Invoice {
    pub(crate) fn new(id: Id, client: ClientData) -> Self {
        Self {
            id,
            client,
            items: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, line: InvoiceLine) {
        self.items.push(line);
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn items(&self) -> &[InvoiceLine] {
        &self.items
    }

    /// Sum of line nets.
    pub fn net(&self) -> DomainResult<Money> {
        Money::try_sum(self.items.iter().map(InvoiceLine::net))
    }

    /// Net plus every line's tax.
    pub fn gross(&self) -> DomainResult<Money> {
        let taxes = Money::try_sum(self.items.iter().map(|line| line.tax.amount()))?;
        self.net()?.checked_add(&taxes)
    }
}
