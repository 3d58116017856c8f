use ecommerce_core::{ClientData, Id};

use crate::invoice::{Invoice, InvoiceLine};
use crate::request::RequestItem;
use crate::tax::Tax;

/// Builds invoices line by line.
///
/// Appending takes the invoice by value and hands it back, so a half-built
/// invoice is never shared. Tax values are trusted as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceFactory;

impl InvoiceFactory {
    pub fn new() -> Self {
        Self
    }

    /// Start an empty invoice for `client` under a freshly generated id.
    pub fn create(&self, client: ClientData) -> Invoice {
        Invoice::new(Id::generate(), client)
    }

    /// Append `(item, tax)` after every line already on the invoice.
    pub fn add(&self, mut invoice: Invoice, item: RequestItem, tax: Tax) -> Invoice {
        invoice.push(InvoiceLine::new(item, tax));
        invoice
    }
}
