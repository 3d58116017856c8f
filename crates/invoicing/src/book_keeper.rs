//! Invoice issuance: request in, taxed invoice out.

use crate::factory::InvoiceFactory;
use crate::invoice::Invoice;
use crate::request::InvoiceRequest;
use crate::tax::{TaxError, TaxPolicy};

/// Issues invoices from invoice requests.
///
/// For every requested line, in order, the tax policy is asked exactly once;
/// the line and its tax are appended to the invoice under construction.
/// The first policy error aborts issuance and is returned as-is: no retry,
/// no partial invoice.
#[derive(Debug, Clone, Default)]
pub struct BookKeeper {
    invoice_factory: InvoiceFactory,
}

impl BookKeeper {
    pub fn new(invoice_factory: InvoiceFactory) -> Self {
        Self { invoice_factory }
    }

    pub fn issuance<P>(&self, request: &InvoiceRequest, tax_policy: &P) -> Result<Invoice, TaxError>
    where
        P: TaxPolicy + ?Sized,
    {
        let invoice = self.invoice_factory.create(request.client().clone());

        request.items().iter().try_fold(invoice, |invoice, item| {
            let tax = tax_policy
                .calculate_tax(item.product_data().product_type(), item.total_price())?;
            Ok(self.invoice_factory.add(invoice, item.clone(), tax))
        })
    }
}
