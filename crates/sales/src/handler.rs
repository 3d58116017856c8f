//! Command handlers: load aggregates, call the domain, store the result.
//!
//! Collaborators are injected at construction so tests can swap in in-memory
//! repositories and recording tax policies.

use std::sync::Arc;

use ecommerce_core::Id;
use ecommerce_invoicing::{BookKeeper, Invoice, TaxPolicy};
use ecommerce_products::ProductRepository;

use crate::command::{AddProductCommand, IssueInvoiceCommand};
use crate::error::SalesError;
use crate::repository::ReservationRepository;
use crate::reservation::Reservation;

fn load_reservation(
    repository: &dyn ReservationRepository,
    id: &Id,
) -> Result<Reservation, SalesError> {
    repository
        .load(id)?
        .ok_or_else(|| SalesError::ReservationNotFound(id.clone()))
}

/// Handles [`AddProductCommand`]: reserve a catalog product.
pub struct AddProductCommandHandler {
    reservation_repository: Arc<dyn ReservationRepository>,
    product_repository: Arc<dyn ProductRepository>,
}

impl AddProductCommandHandler {
    pub fn new(
        reservation_repository: Arc<dyn ReservationRepository>,
        product_repository: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            reservation_repository,
            product_repository,
        }
    }

    pub fn handle(&self, command: &AddProductCommand) -> Result<(), SalesError> {
        let result = self.try_handle(command);
        if let Err(err) = &result {
            tracing::warn!(
                order_id = %command.order_id,
                product_id = %command.product_id,
                "add product failed: {err}"
            );
        }
        result
    }

    fn try_handle(&self, command: &AddProductCommand) -> Result<(), SalesError> {
        let mut reservation =
            load_reservation(&*self.reservation_repository, &command.order_id)?;
        let product = self
            .product_repository
            .load(&command.product_id)?
            .ok_or_else(|| SalesError::ProductNotFound(command.product_id.clone()))?;

        reservation.add(&product, command.quantity)?;
        tracing::debug!(
            order_id = %command.order_id,
            product_id = %command.product_id,
            quantity = command.quantity,
            "product reserved"
        );

        self.reservation_repository.save(&reservation)?;
        tracing::info!(
            order_id = %command.order_id,
            items = reservation.items().len(),
            "reservation updated"
        );
        Ok(())
    }
}

/// Handles [`IssueInvoiceCommand`]: close the reservation and invoice it.
///
/// The closed reservation is stored only once the invoice has been issued, so
/// a tax policy failure leaves the stored reservation untouched.
pub struct IssueInvoiceCommandHandler {
    reservation_repository: Arc<dyn ReservationRepository>,
    book_keeper: BookKeeper,
    tax_policy: Arc<dyn TaxPolicy + Send + Sync>,
}

impl IssueInvoiceCommandHandler {
    pub fn new(
        reservation_repository: Arc<dyn ReservationRepository>,
        book_keeper: BookKeeper,
        tax_policy: Arc<dyn TaxPolicy + Send + Sync>,
    ) -> Self {
        Self {
            reservation_repository,
            book_keeper,
            tax_policy,
        }
    }

    pub fn handle(&self, command: &IssueInvoiceCommand) -> Result<Invoice, SalesError> {
        let result = self.try_handle(command);
        if let Err(err) = &result {
            tracing::warn!(order_id = %command.order_id, "invoice issuance failed: {err}");
        }
        result
    }

    fn try_handle(&self, command: &IssueInvoiceCommand) -> Result<Invoice, SalesError> {
        let mut reservation =
            load_reservation(&*self.reservation_repository, &command.order_id)?;
        if !reservation.is_closed() {
            reservation.close()?;
            tracing::debug!(order_id = %command.order_id, "reservation closed");
        }

        let request = reservation.invoice_request()?;
        let invoice = self
            .book_keeper
            .issuance(&request, &*self.tax_policy)?;

        self.reservation_repository.save(&reservation)?;
        tracing::info!(
            order_id = %command.order_id,
            invoice_id = %invoice.id(),
            client_id = %invoice.client().id(),
            lines = invoice.items().len(),
            "invoice issued"
        );
        Ok(invoice)
    }
}
