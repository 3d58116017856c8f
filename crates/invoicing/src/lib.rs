//! Invoicing domain module.
//!
//! Turns an [`InvoiceRequest`] into an immutable [`Invoice`], asking a
//! [`TaxPolicy`] for the tax of every requested line. Implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage, no logging).

pub mod book_keeper;
pub mod factory;
pub mod invoice;
pub mod request;
pub mod tax;

pub use book_keeper::BookKeeper;
pub use factory::InvoiceFactory;
pub use invoice::{Invoice, InvoiceLine};
pub use request::{InvoiceRequest, RequestItem};
pub use tax::{DefaultTaxPolicy, Tax, TaxError, TaxPolicy, TaxRate};
