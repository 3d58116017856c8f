use thiserror::Error;

use ecommerce_core::{DomainError, Id, RepositoryError};
use ecommerce_invoicing::TaxError;

/// Application-level failure of a sales command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SalesError {
    #[error("reservation {0} not found")]
    ReservationNotFound(Id),

    #[error("product {0} not found")]
    ProductNotFound(Id),

    /// A reservation or catalog rule rejected the command.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The tax policy failed while issuing the invoice.
    #[error(transparent)]
    Tax(#[from] TaxError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
